use crate::error::{GeometryError, Result};
use crate::geometry::{Axis, Coefficients, SurfaceFamily};
use crate::math::{semi_axis, Point3};

use super::{place, require_family, Surface, SurfaceDomain};

/// Rewrites the coefficients so that `D < 0`, negating the whole tuple
/// when necessary. Both tuples describe the same surface.
fn with_negative_constant(coefficients: &Coefficients) -> Coefficients {
    if coefficients.d > 0.0 {
        coefficients.negated()
    } else {
        *coefficients
    }
}

/// `sqrt(|D / coefficient|)` for each quadratic coefficient.
fn unsigned_semi_axes(coefficients: &Coefficients, what: &'static str) -> Result<[f64; 3]> {
    let d = coefficients.d.abs();
    Ok([
        semi_axis(d, coefficients.a.abs(), what)?,
        semi_axis(d, coefficients.b.abs(), what)?,
        semi_axis(d, coefficients.c.abs(), what)?,
    ])
}

/// A hyperboloid of one sheet.
///
/// The throat axis is the one whose coefficient is negative (after
/// normalizing to `D < 0`). With `C < 0`:
///
/// `P(u, v) = (a * cosh(v) * cos(u), b * cosh(v) * sin(u), c * sinh(v))`
///
/// with `a = sqrt(|D/A|)`, `b = sqrt(|D/B|)`, `c = sqrt(|D/C|)`.
#[derive(Debug, Clone)]
pub struct OneSheetHyperboloid {
    axis: Axis,
    semi_axes: [f64; 3],
    span: f64,
}

impl OneSheetHyperboloid {
    /// Creates a one-sheet hyperboloid whose `v` parameter sweeps `span`
    /// symmetrically around the throat.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients do not classify as a one-sheet
    /// hyperboloid or a semi-axis cannot be computed.
    pub fn new(coefficients: &Coefficients, span: f64) -> Result<Self> {
        require_family(coefficients, &[SurfaceFamily::OneSheetHyperboloid])?;
        let normalized = with_negative_constant(coefficients);
        let axis = normalized.odd_axis().ok_or_else(|| {
            GeometryError::Degenerate("one-sheet hyperboloid has no throat axis".into())
        })?;
        Ok(Self {
            axis,
            semi_axes: unsigned_semi_axes(&normalized, "one-sheet semi-axis")?,
            span,
        })
    }

    /// Returns the axis the hyperboloid opens along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Surface for OneSheetHyperboloid {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (o0, o1) = self.axis.others();
        let s = self.semi_axes;
        let (su, cu) = u.sin_cos();
        place(
            self.axis,
            s[o0.index()] * v.cosh() * cu,
            s[o1.index()] * v.cosh() * su,
            s[self.axis.index()] * v.sinh(),
        )
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::angular(self.span)
    }
}

/// How the sheets of a [`TwoSheetHyperboloid`] are traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetProfile {
    /// `(-A, -B, -C, -D)` has one positive coefficient and `D < 0`; the
    /// sheets are traced exactly with `cosh`/`sinh`.
    Exact,
    /// `A, B, C, D > 0`. The equation has no real points, so the sheets
    /// follow the display profile `sqrt(1 + t²)` / `1 + |t|` along z.
    Display,
}

/// A hyperboloid of two sheets.
///
/// The `v` parameter is split at zero: `v < 0` traces the sheet on the
/// positive side of the axis, `v >= 0` the sheet on the negative side.
/// The axis is the one whose coefficient is positive after normalizing to
/// `D < 0`. With `C > 0`:
///
/// `P(u, v) = (a * sinh|v| * cos(u), b * sinh|v| * sin(u), ±c * cosh(v))`
#[derive(Debug, Clone)]
pub struct TwoSheetHyperboloid {
    axis: Axis,
    semi_axes: [f64; 3],
    span: f64,
    profile: SheetProfile,
}

impl TwoSheetHyperboloid {
    /// Creates a two-sheet hyperboloid whose `v` parameter sweeps `span`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients do not classify as a two-sheet
    /// hyperboloid or a semi-axis cannot be computed.
    pub fn new(coefficients: &Coefficients, span: f64) -> Result<Self> {
        require_family(coefficients, &[SurfaceFamily::TwoSheetHyperboloid])?;

        let Coefficients { a, b, c, d } = *coefficients;
        if a > 0.0 && b > 0.0 && c > 0.0 && d > 0.0 {
            return Ok(Self {
                axis: Axis::Z,
                semi_axes: [
                    semi_axis(d, a, "two-sheet semi-axis a")?,
                    semi_axis(d, b, "two-sheet semi-axis b")?,
                    semi_axis(d, c, "two-sheet semi-axis c")?,
                ],
                span,
                profile: SheetProfile::Display,
            });
        }

        let normalized = with_negative_constant(coefficients);
        let axis = normalized.odd_axis().ok_or_else(|| {
            GeometryError::Degenerate("two-sheet hyperboloid has no sheet axis".into())
        })?;
        Ok(Self {
            axis,
            semi_axes: unsigned_semi_axes(&normalized, "two-sheet semi-axis")?,
            span,
            profile: SheetProfile::Exact,
        })
    }

    /// Returns the axis separating the two sheets.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns `true` when the sheets are traced exactly on the surface.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.profile == SheetProfile::Exact
    }
}

impl Surface for TwoSheetHyperboloid {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (o0, o1) = self.axis.others();
        let s = self.semi_axes;
        let (su, cu) = u.sin_cos();
        let side = if v < 0.0 { 1.0 } else { -1.0 };
        let (radial, along) = match self.profile {
            SheetProfile::Exact => (v.abs().sinh(), v.cosh()),
            SheetProfile::Display => ((1.0 + v * v).sqrt(), 1.0 + v.abs()),
        };
        place(
            self.axis,
            s[o0.index()] * radial * cu,
            s[o1.index()] * radial * su,
            side * s[self.axis.index()] * along,
        )
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::angular(self.span)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_on_surface(coefficients: &Coefficients, surface: &dyn Surface) {
        for &(u, v) in &[(0.0, -1.2), (1.0, -0.4), (2.5, 0.0), (4.0, 0.7), (6.0, 1.4)] {
            let p = surface.evaluate(u, v);
            let scale = 1.0 + p.coords.norm_squared();
            assert_abs_diff_eq!(coefficients.evaluate(&p) / scale, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn one_sheet_along_z() {
        let c = Coefficients::new(1.0, 1.0, -1.0, -1.0);
        let h = OneSheetHyperboloid::new(&c, 3.0).unwrap();
        assert_eq!(h.axis(), Axis::Z);
        let throat = h.evaluate(0.0, 0.0);
        assert_abs_diff_eq!(throat.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(throat.z, 0.0, epsilon = 1e-12);
        assert_on_surface(&c, &h);
    }

    #[test]
    fn one_sheet_every_axis() {
        for c in [
            Coefficients::new(-2.0, 1.0, 3.0, -1.0),
            Coefficients::new(1.0, -0.5, 2.0, -2.0),
            Coefficients::new(-1.0, -1.0, 1.0, 1.0),
        ] {
            let h = OneSheetHyperboloid::new(&c, 3.0).unwrap();
            assert_on_surface(&c, &h);
        }
    }

    #[test]
    fn one_sheet_domain_uses_span() {
        let h = OneSheetHyperboloid::new(&Coefficients::new(1.0, 1.0, -1.0, -1.0), 2.5).unwrap();
        assert_abs_diff_eq!(h.domain().v_min, -1.25);
        assert_abs_diff_eq!(h.domain().v_max, 1.25);
    }

    #[test]
    fn two_sheet_preset_is_exact_along_z() {
        let c = Coefficients::new(1.0, 1.0, -1.0, 1.0);
        let h = TwoSheetHyperboloid::new(&c, 4.0).unwrap();
        assert!(h.is_exact());
        assert_eq!(h.axis(), Axis::Z);
        assert_on_surface(&c, &h);
    }

    #[test]
    fn two_sheet_every_axis() {
        for c in [
            Coefficients::new(-1.0, -1.0, 1.0, -1.0),
            Coefficients::new(-1.0, 2.0, -1.0, -1.0),
            Coefficients::new(3.0, -1.0, -2.0, -1.0),
        ] {
            let h = TwoSheetHyperboloid::new(&c, 4.0).unwrap();
            assert!(h.is_exact());
            assert_on_surface(&c, &h);
        }
    }

    #[test]
    fn two_sheet_splits_sheets_at_zero() {
        let h = TwoSheetHyperboloid::new(&Coefficients::new(-1.0, -1.0, 1.0, -1.0), 4.0).unwrap();
        assert!(h.evaluate(1.0, -0.5).z > 0.0);
        assert!(h.evaluate(1.0, 0.5).z < 0.0);
        assert_abs_diff_eq!(h.evaluate(0.0, 0.0).z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn all_positive_uses_display_profile() {
        let h = TwoSheetHyperboloid::new(&Coefficients::new(1.0, 1.0, 1.0, 4.0), 3.0).unwrap();
        assert!(!h.is_exact());
        let upper = h.evaluate(0.0, -1.0);
        assert_abs_diff_eq!(upper.z, 2.0 * 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(upper.x, 2.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
        let lower = h.evaluate(0.0, 1.0);
        assert_abs_diff_eq!(lower.z, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_other_families() {
        assert!(OneSheetHyperboloid::new(&Coefficients::new(1.0, 1.0, 1.0, -1.0), 3.0).is_err());
        assert!(TwoSheetHyperboloid::new(&Coefficients::new(1.0, 1.0, -1.0, -1.0), 3.0).is_err());
    }
}

use crate::error::Result;
use crate::geometry::{Axis, Coefficients, SurfaceFamily};
use crate::math::{semi_axis, Point3};

use super::{place, require_family, Surface, SurfaceDomain};

/// An elliptic double cone with its apex at the origin.
///
/// The cone axis is the one whose coefficient has the opposite sign of the
/// other two; when there is no such axis (e.g. all positive) it is z.
/// With z as the axis:
///
/// `P(u, v) = (a * v * cos(u), b * v * sin(u), c * v)`
///
/// with `a = sqrt(1/|A|)`, `b = sqrt(1/|B|)`, `c = sqrt(1/|C|)`. The
/// constant `D` is ignored since it is near zero by classification.
#[derive(Debug, Clone)]
pub struct Cone {
    axis: Axis,
    semi_axes: [f64; 3],
    span: f64,
}

impl Cone {
    /// Creates a cone whose `v` parameter sweeps `span` symmetrically
    /// around the apex.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients do not classify as a cone or
    /// any quadratic coefficient is near zero.
    pub fn new(coefficients: &Coefficients, span: f64) -> Result<Self> {
        require_family(coefficients, &[SurfaceFamily::Cone])?;
        Ok(Self {
            axis: coefficients.odd_axis().unwrap_or(Axis::Z),
            semi_axes: [
                semi_axis(1.0, coefficients.a.abs(), "cone semi-axis a")?,
                semi_axis(1.0, coefficients.b.abs(), "cone semi-axis b")?,
                semi_axis(1.0, coefficients.c.abs(), "cone semi-axis c")?,
            ],
            span,
        })
    }

    /// Returns the cone axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Surface for Cone {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (o0, o1) = self.axis.others();
        let s = self.semi_axes;
        let (su, cu) = u.sin_cos();
        place(
            self.axis,
            s[o0.index()] * v * cu,
            s[o1.index()] * v * su,
            s[self.axis.index()] * v,
        )
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::angular(self.span)
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::math::{CONSTANT_TOLERANCE, EQUALITY_TOLERANCE};

use super::Coefficients;

/// The qualitative shape described by a set of coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFamily {
    Sphere,
    Ellipsoid,
    OneSheetHyperboloid,
    TwoSheetHyperboloid,
    Cone,
    Cylinder,
    Unknown,
}

impl SurfaceFamily {
    /// The six named families, excluding [`SurfaceFamily::Unknown`].
    pub const ALL: [Self; 6] = [
        Self::Sphere,
        Self::Ellipsoid,
        Self::OneSheetHyperboloid,
        Self::TwoSheetHyperboloid,
        Self::Cone,
        Self::Cylinder,
    ];

    /// Short identifier, as used by quiz answers and presets.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Ellipsoid => "ellipsoid",
            Self::OneSheetHyperboloid => "one-sheet",
            Self::TwoSheetHyperboloid => "two-sheet",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Unknown => "unknown",
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Ellipsoid => "Ellipsoid",
            Self::OneSheetHyperboloid => "One-Sheet Hyperboloid",
            Self::TwoSheetHyperboloid => "Two-Sheet Hyperboloid",
            Self::Cone => "Elliptic Cone",
            Self::Cylinder => "Elliptic Cylinder",
            Self::Unknown => "Quadric Surface",
        }
    }

    /// One-sentence description of the coefficient pattern.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Sphere => "All coefficients are positive and equal, D is negative",
            Self::Ellipsoid => "All coefficients are positive but different, D is negative",
            Self::OneSheetHyperboloid => "Two coefficients positive, one negative, D is negative",
            Self::TwoSheetHyperboloid => {
                "All coefficients positive, D is positive OR two negative, one positive"
            }
            Self::Cone => "Two coefficients positive, one negative, D is zero",
            Self::Cylinder => "One coefficient is zero, others are positive, D is negative",
            Self::Unknown => "Coefficients do not match a named quadric family",
        }
    }

    /// Describes the surface in terms of the actual sign pattern of
    /// `coefficients`, e.g. `"Two positive, one negative (+ + -), D negative (-): ..."`.
    ///
    /// A value counts as `+` only when strictly positive.
    #[must_use]
    pub fn describe_signs(self, coefficients: &Coefficients) -> String {
        let sign = |v: f64| if v > 0.0 { '+' } else { '-' };
        let pattern = format!(
            "{} {} {}",
            sign(coefficients.a),
            sign(coefficients.b),
            sign(coefficients.c)
        );
        let d = sign(coefficients.d);
        match self {
            Self::Sphere => format!(
                "All coefficients positive and equal ({pattern}), D negative ({d}): creates perfect symmetry"
            ),
            Self::Ellipsoid => format!(
                "All coefficients positive ({pattern}), D negative ({d}): closed surface with different radii"
            ),
            Self::OneSheetHyperboloid => format!(
                "Two positive, one negative ({pattern}), D negative ({d}): opens like a saddle"
            ),
            Self::TwoSheetHyperboloid => {
                format!("Pattern {pattern}, D {d}: creates two separate sheets")
            }
            Self::Cone => {
                format!("Two positive, one negative ({pattern}), D = 0: vertex at origin")
            }
            Self::Cylinder => "One coefficient zero, others positive, D negative: extends infinitely along missing axis".to_owned(),
            Self::Unknown => format!("Pattern {pattern}, D {d}: general quadric form"),
        }
    }
}

impl fmt::Display for SurfaceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceFamily {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .chain(std::iter::once(Self::Unknown))
            .find(|family| family.key() == key)
            .ok_or_else(|| InputError::UnknownFamily(s.to_owned()))
    }
}

/// Classifies `Ax² + By² + Cz² + D = 0` into a [`SurfaceFamily`].
///
/// Rules are checked in order and the first match wins:
///
/// 1. `|D| < 0.1` is a cone, whatever the signs of `A`, `B`, `C`.
/// 2. `C == 0` exactly is a cylinder.
/// 3. `A, B, C > 0`: a sphere (all pairwise within 0.1) or ellipsoid when
///    `D < 0`, a two-sheet hyperboloid when `D > 0`.
/// 4. Mixed signs with `D < 0`: two positive and one negative is a
///    one-sheet hyperboloid, one positive and two negative is a two-sheet
///    hyperboloid. With `D > 0` the tuple is negated first, since
///    `(-A, -B, -C, -D)` is the same surface.
/// 5. Anything else is [`SurfaceFamily::Unknown`].
#[must_use]
pub fn classify(coefficients: Coefficients) -> SurfaceFamily {
    let Coefficients { a, b, c, d } = coefficients;

    if d.abs() < CONSTANT_TOLERANCE {
        return SurfaceFamily::Cone;
    }

    #[allow(clippy::float_cmp)]
    if c == 0.0 {
        return SurfaceFamily::Cylinder;
    }

    if a > 0.0 && b > 0.0 && c > 0.0 {
        if d < 0.0 {
            let equal = (a - b).abs() < EQUALITY_TOLERANCE && (b - c).abs() < EQUALITY_TOLERANCE;
            return if equal {
                SurfaceFamily::Sphere
            } else {
                SurfaceFamily::Ellipsoid
            };
        }
        if d > 0.0 {
            return SurfaceFamily::TwoSheetHyperboloid;
        }
    }

    let normalized = if d > 0.0 {
        coefficients.negated()
    } else if d < 0.0 {
        coefficients
    } else {
        return SurfaceFamily::Unknown;
    };

    let counts = normalized.sign_counts();
    match (counts.positive, counts.negative) {
        (2, 1) => SurfaceFamily::OneSheetHyperboloid,
        (1, 2) => SurfaceFamily::TwoSheetHyperboloid,
        _ => SurfaceFamily::Unknown,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn family(a: f64, b: f64, c: f64, d: f64) -> SurfaceFamily {
        classify(Coefficients::new(a, b, c, d))
    }

    #[test]
    fn classifies_presets() {
        assert_eq!(family(1.0, 1.0, 1.0, -1.0), SurfaceFamily::Sphere);
        assert_eq!(family(1.0, 2.0, 0.5, -1.0), SurfaceFamily::Ellipsoid);
        assert_eq!(family(1.0, 1.0, -1.0, -1.0), SurfaceFamily::OneSheetHyperboloid);
        assert_eq!(family(1.0, 1.0, -1.0, 1.0), SurfaceFamily::TwoSheetHyperboloid);
        assert_eq!(family(1.0, 1.0, -1.0, 0.0), SurfaceFamily::Cone);
        assert_eq!(family(1.0, 1.0, 0.0, -1.0), SurfaceFamily::Cylinder);
    }

    #[test]
    fn near_zero_constant_wins_over_sign_pattern() {
        assert_eq!(family(1.0, 1.0, -1.0, 0.05), SurfaceFamily::Cone);
        assert_eq!(family(1.0, 1.0, 1.0, -0.09), SurfaceFamily::Cone);
        assert_eq!(family(0.0, 0.0, 0.0, 0.0), SurfaceFamily::Cone);
    }

    #[test]
    fn zero_c_is_cylinder_before_sign_checks() {
        assert_eq!(family(-1.0, -1.0, 0.0, 3.0), SurfaceFamily::Cylinder);
    }

    #[test]
    fn tiny_nonzero_c_is_not_cylinder() {
        assert_eq!(family(1.0, 2.0, 1e-9, -1.0), SurfaceFamily::Ellipsoid);
    }

    #[test]
    fn sphere_tolerance() {
        assert_eq!(family(1.0, 1.05, 1.09, -2.0), SurfaceFamily::Sphere);
        assert_eq!(family(1.0, 1.0, 1.2, -2.0), SurfaceFamily::Ellipsoid);
    }

    #[test]
    fn all_positive_with_positive_constant_is_two_sheet() {
        assert_eq!(family(2.0, 1.0, 3.0, 1.0), SurfaceFamily::TwoSheetHyperboloid);
    }

    #[test]
    fn every_one_sheet_permutation() {
        assert_eq!(family(-1.0, 1.0, 1.0, -1.0), SurfaceFamily::OneSheetHyperboloid);
        assert_eq!(family(1.0, -1.0, 1.0, -1.0), SurfaceFamily::OneSheetHyperboloid);
        assert_eq!(family(1.0, 1.0, -1.0, -1.0), SurfaceFamily::OneSheetHyperboloid);
    }

    #[test]
    fn every_two_sheet_permutation() {
        assert_eq!(family(-1.0, -1.0, 1.0, -1.0), SurfaceFamily::TwoSheetHyperboloid);
        assert_eq!(family(-1.0, 1.0, -1.0, -1.0), SurfaceFamily::TwoSheetHyperboloid);
        assert_eq!(family(1.0, -1.0, -1.0, -1.0), SurfaceFamily::TwoSheetHyperboloid);
    }

    #[test]
    fn negated_tuple_classifies_the_same() {
        let c = Coefficients::new(-1.0, -1.0, 1.0, 1.0);
        assert_eq!(classify(c), SurfaceFamily::OneSheetHyperboloid);
        assert_eq!(classify(c.negated()), SurfaceFamily::OneSheetHyperboloid);
    }

    #[test]
    fn unmatched_patterns_are_unknown() {
        assert_eq!(family(-1.0, -1.0, -1.0, -1.0), SurfaceFamily::Unknown);
        assert_eq!(family(1.0, 0.0, -1.0, -1.0), SurfaceFamily::Unknown);
        assert_eq!(family(f64::NAN, 1.0, 1.0, -1.0), SurfaceFamily::Unknown);
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for family in SurfaceFamily::ALL {
            assert_eq!(family.key().parse::<SurfaceFamily>().unwrap(), family);
        }
        assert!("torus".parse::<SurfaceFamily>().is_err());
    }

    #[test]
    fn names_for_display() {
        assert_eq!(SurfaceFamily::Cone.to_string(), "Elliptic Cone");
        assert_eq!(SurfaceFamily::Unknown.name(), "Quadric Surface");
    }

    #[test]
    fn sign_description_uses_pattern() {
        let c = Coefficients::new(1.0, 1.0, -1.0, -1.0);
        let text = SurfaceFamily::OneSheetHyperboloid.describe_signs(&c);
        assert!(text.starts_with("Two positive, one negative (+ + -), D negative (-)"));
    }
}

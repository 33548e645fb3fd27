use crate::error::Result;
use crate::geometry::{Coefficients, SurfaceFamily};
use crate::math::{semi_axis, Point3};

use super::{require_family, Surface, SurfaceDomain};

/// An axis-aligned ellipsoid `x²/a² + y²/b² + z²/c² = 1` centered at the origin.
///
/// `P(u, v) = (a * sin(v) * cos(u), b * sin(v) * sin(u), c * cos(v))`
///
/// Parameters: `u` = longitude `[0, 2*pi]`, `v` = polar angle `[0, pi]`.
/// Spheres use the same parametrization with `a = b = c`.
#[derive(Debug, Clone)]
pub struct Ellipsoid {
    semi_axes: [f64; 3],
}

impl Ellipsoid {
    /// Creates an ellipsoid from coefficients with `A, B, C > 0` and `D < 0`.
    ///
    /// The semi-axes are `sqrt(-D/A)`, `sqrt(-D/B)`, `sqrt(-D/C)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients do not classify as a sphere or
    /// ellipsoid, or a semi-axis cannot be computed.
    pub fn new(coefficients: &Coefficients) -> Result<Self> {
        require_family(
            coefficients,
            &[SurfaceFamily::Ellipsoid, SurfaceFamily::Sphere],
        )?;
        let d = coefficients.d;
        Ok(Self {
            semi_axes: [
                semi_axis(-d, coefficients.a, "ellipsoid semi-axis a")?,
                semi_axis(-d, coefficients.b, "ellipsoid semi-axis b")?,
                semi_axis(-d, coefficients.c, "ellipsoid semi-axis c")?,
            ],
        })
    }

    /// Returns the semi-axis lengths `[a, b, c]`.
    #[must_use]
    pub fn semi_axes(&self) -> [f64; 3] {
        self.semi_axes
    }
}

impl Surface for Ellipsoid {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let [a, b, c] = self.semi_axes;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        Point3::new(a * sv * cu, b * sv * su, c * cv)
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, std::f64::consts::TAU, 0.0, std::f64::consts::PI)
    }
}

use crate::error::Result;
use crate::geometry::{Coefficients, SurfaceFamily};
use crate::math::{semi_axis, Point3};

use super::{require_family, Surface, SurfaceDomain};

/// An elliptic cylinder `Ax² + By² + D = 0` extending along z.
///
/// `P(u, v) = (a * cos(u), b * sin(u), v)`
///
/// with `a = sqrt(-D/A)`, `b = sqrt(-D/B)`. Parameters: `u` sweeps the
/// cross-section `[0, 2*pi]`, `v` is the height.
#[derive(Debug, Clone)]
pub struct Cylinder {
    semi_axes: [f64; 2],
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder of total `height`, centered on the xy-plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients do not classify as a cylinder,
    /// or the cross-section is not a real ellipse (`A, B > 0`, `D < 0`).
    pub fn new(coefficients: &Coefficients, height: f64) -> Result<Self> {
        require_family(coefficients, &[SurfaceFamily::Cylinder])?;
        let d = coefficients.d;
        Ok(Self {
            semi_axes: [
                semi_axis(-d, coefficients.a, "cylinder semi-axis a")?,
                semi_axis(-d, coefficients.b, "cylinder semi-axis b")?,
            ],
            height,
        })
    }
}

impl Surface for Cylinder {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let [a, b] = self.semi_axes;
        let (su, cu) = u.sin_cos();
        Point3::new(a * cu, b * su, v)
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::angular(self.height)
    }
}

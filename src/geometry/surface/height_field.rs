use crate::geometry::Coefficients;
use crate::math::{Point3, DIVISOR_TOLERANCE};

use super::{Surface, SurfaceDomain};

/// The upper half of `Ax² + By² + Cz² + D = 0` solved for z over a square
/// grid.
///
/// `P(u, v) = (u, v, sqrt(-(A*u² + B*v² + D) / C))`
///
/// Where `C` is near zero or the radicand is negative, `z` is NaN while
/// `x` and `y` keep their grid values.
#[derive(Debug, Clone)]
pub struct HeightField {
    coefficients: Coefficients,
    range: f64,
}

impl HeightField {
    /// Creates a height field over `[-range, range]²`.
    #[must_use]
    pub fn new(coefficients: &Coefficients, range: f64) -> Self {
        Self {
            coefficients: *coefficients,
            range,
        }
    }

    /// Solves for the non-negative `z` at `(x, y)`, if any.
    #[must_use]
    pub fn height(&self, x: f64, y: f64) -> Option<f64> {
        let Coefficients { a, b, c, d } = self.coefficients;
        if c.abs() <= DIVISOR_TOLERANCE {
            return None;
        }
        let z_squared = -(a * x * x + b * y * y + d) / c;
        (z_squared >= 0.0 && z_squared.is_finite()).then(|| z_squared.sqrt())
    }
}

impl Surface for HeightField {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        Point3::new(u, v, self.height(u, v).unwrap_or(f64::NAN))
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(-self.range, self.range, -self.range, self.range)
    }
}

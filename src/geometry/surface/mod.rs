mod cone;
mod cylinder;
mod ellipsoid;
mod height_field;
mod hyperboloid;

pub use cone::Cone;
pub use cylinder::Cylinder;
pub use ellipsoid::Ellipsoid;
pub use height_field::HeightField;
pub use hyperboloid::{OneSheetHyperboloid, TwoSheetHyperboloid};

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{Axis, Coefficients, SurfaceFamily};

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }

    /// A domain with `u` over `[0, 2*pi]` and `v` centered on zero with
    /// total width `span`.
    #[must_use]
    pub fn angular(span: f64) -> Self {
        Self::new(0.0, std::f64::consts::TAU, -span / 2.0, span / 2.0)
    }
}

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`.
    ///
    /// Coordinates that are undefined at `(u, v)` are NaN.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;
}

/// A parametrization chosen for one quadric family.
#[derive(Debug, Clone)]
pub enum QuadricSurface {
    Ellipsoid(Ellipsoid),
    OneSheet(OneSheetHyperboloid),
    TwoSheet(TwoSheetHyperboloid),
    Cone(Cone),
    Cylinder(Cylinder),
    HeightField(HeightField),
}

impl QuadricSurface {
    /// Borrows the parametrization as a [`Surface`].
    #[must_use]
    pub fn as_surface(&self) -> &dyn Surface {
        match self {
            Self::Ellipsoid(s) => s,
            Self::OneSheet(s) => s,
            Self::TwoSheet(s) => s,
            Self::Cone(s) => s,
            Self::Cylinder(s) => s,
            Self::HeightField(s) => s,
        }
    }

    /// Returns `true` for the implicit fallback, which only covers the
    /// `z >= 0` half of the surface.
    #[must_use]
    pub fn is_height_field(&self) -> bool {
        matches!(self, Self::HeightField(_))
    }
}

/// Checks that `coefficients` classify as one of `expected`, returning the
/// actual family.
fn require_family(coefficients: &Coefficients, expected: &[SurfaceFamily]) -> Result<SurfaceFamily> {
    let found = coefficients.classify();
    if expected.contains(&found) {
        Ok(found)
    } else {
        Err(GeometryError::FamilyMismatch {
            expected: expected[0],
            found,
        }
        .into())
    }
}

/// Builds a point from a local frame whose third coordinate runs along
/// `axis` and whose first two follow [`Axis::others`].
fn place(axis: Axis, first: f64, second: f64, along: f64) -> Point3 {
    let (a0, a1) = axis.others();
    let mut p = [0.0; 3];
    p[a0.index()] = first;
    p[a1.index()] = second;
    p[axis.index()] = along;
    Point3::new(p[0], p[1], p[2])
}

use tracing::debug;

use crate::error::Result;
use crate::geometry::surface::{
    Cone, Cylinder, Ellipsoid, HeightField, OneSheetHyperboloid, TwoSheetHyperboloid,
};
use crate::geometry::{Coefficients, QuadricSurface, Surface, SurfaceFamily};
use crate::math::Point3;

use super::{Mesh, MeshParams};

/// Meshes a quadric on a uniform `(resolution + 1)²` parameter grid.
///
/// The parametrization is chosen from the single canonical classification
/// of the coefficients, so the mesh always agrees with
/// [`classify`](crate::geometry::classify). Coefficients that cannot be
/// parametrized (negative radicands, vanishing divisors) produce NaN
/// points instead of an error.
pub struct TessellateQuadric {
    coefficients: Coefficients,
    params: MeshParams,
}

impl TessellateQuadric {
    /// Creates a new `TessellateQuadric` operation.
    #[must_use]
    pub fn new(coefficients: Coefficients, params: MeshParams) -> Self {
        Self {
            coefficients,
            params,
        }
    }

    /// Builds the parametric surface used for these coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if the classified family cannot be parametrized
    /// for these coefficient values.
    pub fn surface(&self) -> Result<QuadricSurface> {
        parametrize(&self.coefficients, self.coefficients.classify(), &self.params)
    }

    /// Executes the tessellation.
    #[must_use]
    pub fn execute(&self) -> Mesh {
        let family = self.coefficients.classify();
        let size = grid_cells(&self.params) + 1;
        match parametrize(&self.coefficients, family, &self.params) {
            Ok(surface) => {
                let mut mesh = Mesh::undefined(size, family);
                for (i, j, p) in sample_grid(surface.as_surface(), grid_cells(&self.params)) {
                    mesh.x[(i, j)] = sanitize(p.x);
                    mesh.y[(i, j)] = sanitize(p.y);
                    mesh.z[(i, j)] = sanitize(p.z);
                }
                mesh
            }
            Err(err) => {
                debug!(?family, coefficients = ?self.coefficients, %err, "surface cannot be parametrized");
                Mesh::undefined(size, family)
            }
        }
    }
}

/// Number of grid cells per side, at least one.
pub(super) fn grid_cells(params: &MeshParams) -> usize {
    params.resolution.max(1)
}

/// Chooses the parametrization for `family`.
pub(super) fn parametrize(
    coefficients: &Coefficients,
    family: SurfaceFamily,
    params: &MeshParams,
) -> Result<QuadricSurface> {
    Ok(match family {
        SurfaceFamily::Sphere | SurfaceFamily::Ellipsoid => {
            QuadricSurface::Ellipsoid(Ellipsoid::new(coefficients)?)
        }
        SurfaceFamily::OneSheetHyperboloid => QuadricSurface::OneSheet(OneSheetHyperboloid::new(
            coefficients,
            params.one_sheet_span,
        )?),
        SurfaceFamily::TwoSheetHyperboloid => QuadricSurface::TwoSheet(TwoSheetHyperboloid::new(
            coefficients,
            params.two_sheet_span,
        )?),
        SurfaceFamily::Cone => QuadricSurface::Cone(Cone::new(coefficients, params.cone_span)?),
        SurfaceFamily::Cylinder => {
            QuadricSurface::Cylinder(Cylinder::new(coefficients, params.cylinder_height)?)
        }
        SurfaceFamily::Unknown => {
            QuadricSurface::HeightField(HeightField::new(coefficients, params.range))
        }
    })
}

/// Evaluates `surface` on a uniform grid over its domain, yielding
/// `(i, j, point)` with `i` following `u` and `j` following `v`.
pub(super) fn sample_grid(
    surface: &dyn Surface,
    cells: usize,
) -> impl Iterator<Item = (usize, usize, Point3)> + '_ {
    let domain = surface.domain();
    #[allow(clippy::cast_precision_loss)]
    let n = cells as f64;
    (0..=cells).flat_map(move |i| {
        #[allow(clippy::cast_precision_loss)]
        let u = domain.u_min + (domain.u_max - domain.u_min) * (i as f64 / n);
        (0..=cells).map(move |j| {
            #[allow(clippy::cast_precision_loss)]
            let v = domain.v_min + (domain.v_max - domain.v_min) * (j as f64 / n);
            (i, j, surface.evaluate(u, v))
        })
    })
}

/// Maps infinite coordinates to NaN.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::NAN
    }
}

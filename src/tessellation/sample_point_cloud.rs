use tracing::debug;

use crate::geometry::Coefficients;
use crate::math::Point3;

use super::tessellate_quadric::{grid_cells, parametrize, sample_grid};
use super::MeshParams;

/// Samples a quadric as an unstructured cloud of defined points.
///
/// Unlike [`TessellateQuadric`](super::TessellateQuadric), undefined
/// points are dropped rather than kept as NaN, and the implicit fallback
/// contributes both the `+z` and `-z` root of every solvable grid point.
pub struct SamplePointCloud {
    coefficients: Coefficients,
    params: MeshParams,
}

impl SamplePointCloud {
    /// Creates a new `SamplePointCloud` operation.
    #[must_use]
    pub fn new(coefficients: Coefficients, params: MeshParams) -> Self {
        Self {
            coefficients,
            params,
        }
    }

    /// Executes the sampling. Returns an empty cloud when the coefficients
    /// cannot be parametrized.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let family = self.coefficients.classify();
        let surface = match parametrize(&self.coefficients, family, &self.params) {
            Ok(surface) => surface,
            Err(err) => {
                debug!(?family, %err, "no point cloud for coefficients");
                return Vec::new();
            }
        };

        let mirrored = surface.is_height_field();
        let mut points = Vec::new();
        for (_, _, p) in sample_grid(surface.as_surface(), grid_cells(&self.params)) {
            if !p.coords.iter().all(|c| c.is_finite()) {
                continue;
            }
            points.push(p);
            if mirrored {
                points.push(Point3::new(p.x, p.y, -p.z));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parametric_surface_keeps_every_point() {
        let cloud = SamplePointCloud::new(Coefficients::default(), MeshParams::quiz()).execute();
        assert_eq!(cloud.len(), 21 * 21);
    }

    #[test]
    fn height_field_pushes_both_roots() {
        let c = Coefficients::new(1.0, 0.0, -1.0, -1.0);
        let cloud = SamplePointCloud::new(c, MeshParams::quiz()).execute();
        assert!(!cloud.is_empty());
        assert_eq!(cloud.len() % 2, 0);
        for pair in cloud.chunks(2) {
            assert!((pair[0].z + pair[1].z).abs() < 1e-12);
            assert!((pair[0].x - pair[1].x).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn all_zero_quadratic_terms_give_empty_cloud() {
        let cloud = SamplePointCloud::new(Coefficients::new(0.0, 0.0, 0.0, -1.0), MeshParams::quiz())
            .execute();
        assert!(cloud.is_empty());
    }
}

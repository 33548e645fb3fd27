mod sample_point_cloud;
mod tessellate_quadric;

pub use sample_point_cloud::SamplePointCloud;
pub use tessellate_quadric::TessellateQuadric;

use crate::geometry::SurfaceFamily;
use crate::math::{Grid, Point3};

/// Grid resolution and parameter spans used when meshing a quadric.
///
/// Each call site picks its own values; nothing requires them to agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Number of grid cells per side; the mesh has `resolution + 1` rows
    /// and columns.
    pub resolution: usize,
    /// Half-width of the square `(x, y)` range of the implicit fallback.
    pub range: f64,
    /// Total sweep of the hyperbolic parameter of a one-sheet hyperboloid.
    pub one_sheet_span: f64,
    /// Total sweep of the hyperbolic parameter of a two-sheet hyperboloid.
    pub two_sheet_span: f64,
    /// Total sweep of the generator parameter of a cone.
    pub cone_span: f64,
    /// Total height of a cylinder.
    pub cylinder_height: f64,
}

impl MeshParams {
    /// Parameters of the free-form visualizer.
    #[must_use]
    pub fn visualizer() -> Self {
        Self {
            resolution: 25,
            range: 2.5,
            one_sheet_span: 3.0,
            two_sheet_span: 4.0,
            cone_span: 4.0,
            cylinder_height: 6.0,
        }
    }

    /// Parameters of the quiz, at a lower resolution.
    #[must_use]
    pub fn quiz() -> Self {
        Self {
            resolution: 20,
            range: 2.0,
            one_sheet_span: 2.5,
            two_sheet_span: 3.0,
            cone_span: 3.0,
            cylinder_height: 4.0,
        }
    }
}

impl Default for MeshParams {
    fn default() -> Self {
        Self::visualizer()
    }
}

/// A rectangular grid of 3D points stored as three parallel matrices.
///
/// Entry `(i, j)` of `x`, `y` and `z` together form one point. Undefined
/// points hold NaN and are drawn as gaps. Coordinates are never infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// X coordinates.
    pub x: Grid,
    /// Y coordinates.
    pub y: Grid,
    /// Z coordinates.
    pub z: Grid,
    /// The family whose parametrization produced the grid.
    pub family: SurfaceFamily,
}

impl Mesh {
    /// Creates a `size × size` mesh with every coordinate NaN.
    #[must_use]
    pub fn undefined(size: usize, family: SurfaceFamily) -> Self {
        Self {
            x: Grid::from_element(size, size, f64::NAN),
            y: Grid::from_element(size, size, f64::NAN),
            z: Grid::from_element(size, size, f64::NAN),
            family,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.nrows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.x.ncols()
    }

    /// Returns the point at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// Iterates all points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        (0..self.rows()).flat_map(move |i| (0..self.cols()).map(move |j| self.point(i, j)))
    }

    /// Number of points whose three coordinates are all finite.
    #[must_use]
    pub fn defined_points(&self) -> usize {
        self.points()
            .filter(|p| p.coords.iter().all(|c| c.is_finite()))
            .count()
    }

    /// Converts one coordinate matrix into nested rows, the layout most
    /// plotting backends expect.
    #[must_use]
    pub fn rows_of(grid: &Grid) -> Vec<Vec<f64>> {
        grid.row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

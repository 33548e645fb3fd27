pub mod coefficients;
pub mod family;
pub mod surface;

pub use coefficients::{Axis, Coefficient, Coefficients, SignCounts};
pub use family::{classify, SurfaceFamily};
pub use surface::{QuadricSurface, Surface, SurfaceDomain};

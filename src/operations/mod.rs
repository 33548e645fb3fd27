mod format;
mod generate;

pub use format::Equation;
pub use generate::GenerateCoefficients;

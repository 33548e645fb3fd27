use thiserror::Error;

use crate::geometry::SurfaceFamily;

/// Top-level error type for the quadrics crate.
#[derive(Debug, Error)]
pub enum QuadricError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while deriving a parametrization from coefficients.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("square root of negative value {value} while computing {quantity}")]
    NegativeRadicand { quantity: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("no sampling rule for {0}")]
    NoSamplingRule(SurfaceFamily),

    #[error("coefficients describe a {found}, not a {expected}")]
    FamilyMismatch {
        expected: SurfaceFamily,
        found: SurfaceFamily,
    },
}

/// Errors in user-supplied text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("malformed fraction: {0:?}")]
    InvalidFraction(String),

    #[error("zero denominator in {0:?}")]
    ZeroDenominator(String),

    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    #[error("unknown surface family: {0:?}")]
    UnknownFamily(String),
}

/// Errors reported by an external renderer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no plot exists in target {0:?}")]
    MissingPlot(String),

    #[error("renderer failed: {0}")]
    Backend(String),
}

/// Errors related to the quiz flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no question has been generated")]
    NoQuestion,

    #[error("the current question was already answered")]
    AlreadyAnswered,

    #[error("answer the current question first")]
    NotAnswered,
}

/// Errors reported by the streak persistence collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("failed to write streak: {0}")]
    Write(String),
}

/// Convenience type alias for results using [`QuadricError`].
pub type Result<T> = std::result::Result<T, QuadricError>;

use ripple_core::DocumentError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("slider element `{0}` is missing from the document")]
    MissingElement(&'static str),
    #[error("slider is not attached to a document")]
    NotAttached,
    #[error("slider has been destroyed")]
    Destroyed,
    #[error("invalid bounds: min {min} must be below max {max}")]
    InvalidRange { min: f32, max: f32 },
    #[error("invalid step {0}")]
    InvalidStep(f32),
    #[error("invalid value {0}")]
    InvalidValue(f32),
    #[error("canvas surface unavailable")]
    SurfaceUnavailable,
    #[error(transparent)]
    Document(#[from] DocumentError),
}

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
    #[error("Escape radius must be positive and finite, got {0}")]
    InvalidEscapeRadius(f32),
}

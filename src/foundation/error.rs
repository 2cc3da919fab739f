/// Convenience result type used across rgbfade.
pub type FadeResult<T> = Result<T, FadeError>;

/// Top-level error taxonomy used by the fader and the movie assembler.
#[derive(thiserror::Error, Debug)]
pub enum FadeError {
    /// Invalid user-provided input (paths, image shapes, durations, channel indices).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures reported by the video encoding collaborator.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FadeError {
    /// Build a [`FadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FadeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across scratchfx.
pub type ScratchResult<T> = Result<T, ScratchError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Decorative soft failures (texture load failure, playback refusal) are
/// logged and swallowed at the component boundary; these variants cover the
/// cases the host can actually act on.
#[derive(thiserror::Error, Debug)]
pub enum ScratchError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or preparing texture/font assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while operating on the surface pixel buffer.
    #[error("surface error: {0}")]
    Surface(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScratchError {
    /// Build a [`ScratchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScratchError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`ScratchError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across pitchstudio.
pub type StudioResult<T> = Result<T, StudioError>;

/// Top-level error taxonomy used by the renderer and compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// The compositor was invoked without any source images.
    #[error("empty input: at least one image is required")]
    EmptyInput,

    /// One source image could not be turned into a drawable raster.
    #[error("decode failure for image #{index}: {reason}")]
    DecodeFailure {
        /// Position of the failing image in the input sequence.
        index: usize,
        /// Decoder message.
        reason: String,
    },

    /// The raster surface could not be acquired.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The caller cancelled a running composition.
    #[error("composition cancelled")]
    Cancelled,

    /// Invalid caller-provided data (attribute text, settings, config).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding a raster into a lossless blob.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::DecodeFailure`] value.
    pub fn decode(index: usize, reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`StudioError::SurfaceUnavailable`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`StudioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

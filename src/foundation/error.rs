/// Convenience alias for results produced by this crate.
pub type GlyphreelResult<T> = Result<T, GlyphreelError>;

/// Error taxonomy for the conversion pipeline.
///
/// Everything here is caught at the cache boundary and collapses to "no
/// animation for this source"; nothing propagates past it to presentation
/// code.
#[derive(thiserror::Error, Debug)]
pub enum GlyphreelError {
    /// Malformed or unsupported container bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// A frame with impossible dimensions or a mismatched pixel buffer.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// Out-of-range or inconsistent configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anything else, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphreelError {
    /// Construct a [`GlyphreelError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Construct a [`GlyphreelError::InvalidFrame`].
    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame(msg.into())
    }

    /// Construct a [`GlyphreelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

//! Image generation error types.
//!
//! Image failures are absorbed by the orchestrator rather than surfaced, so
//! these types mostly appear in logs.

/// Specific error conditions for the image-generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// The upstream provider rejected or failed the request
    #[display("Image provider failed: {}", _0)]
    Provider(String),
    /// The provider response contained no image
    #[display("Provider returned no image")]
    NoImageReturned,
    /// Base64 decoding of the image payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Error type for the image-generation stage.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Text composition error types.

/// Specific error conditions for the text-generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ComposeErrorKind {
    /// The upstream provider rejected or failed the request
    #[display("Content provider failed: {}", _0)]
    Provider(String),
    /// The provider returned an empty response
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// No JSON payload could be located in the response
    #[display("No JSON found in response: {}", _0)]
    NoJson(String),
    /// The JSON payload did not match the expected content shape
    #[display("Failed to parse generated content: {}", _0)]
    Parse(String),
}

/// Error type for the text-generation stage.
///
/// # Examples
///
/// ```
/// use lautrec_error::{ComposeError, ComposeErrorKind};
///
/// let err = ComposeError::new(ComposeErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Compose Error: {} at line {} in {}", kind, line, file)]
pub struct ComposeError {
    /// The specific error condition
    pub kind: ComposeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ComposeError {
    /// Create a new ComposeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Top-level error wrapper types.

use crate::{
    ComposeError, ConfigError, GeminiError, HttpError, ImageError, JsonError, StudioError,
    ValidationError,
};

/// This is the foundation error enum. Each Lautrec crate contributes the
/// variants for its own domain.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: LautrecError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LautrecErrorKind {
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Text-generation stage error
    #[from(ComposeError)]
    Compose(ComposeError),
    /// Image-generation stage error
    #[from(ImageError)]
    Image(ImageError),
    /// Orchestration error
    #[from(StudioError)]
    Studio(StudioError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Lautrec error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecError, LautrecResult, ConfigError};
///
/// fn might_fail() -> LautrecResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lautrec Error: {}", _0)]
pub struct LautrecError(Box<LautrecErrorKind>);

impl LautrecError {
    /// Create a new error from a kind.
    pub fn new(kind: LautrecErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LautrecErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LautrecErrorKind
impl<T> From<T> for LautrecError
where
    T: Into<LautrecErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lautrec operations.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecResult, HttpError};
///
/// fn fetch_data() -> LautrecResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type LautrecResult<T> = std::result::Result<T, LautrecError>;

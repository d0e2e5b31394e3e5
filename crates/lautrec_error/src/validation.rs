//! Input validation error types.

/// Specific precondition violations for generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Excerpt is empty or whitespace-only
    #[display("excerpt required")]
    EmptyExcerpt,
    /// No platform flag was set on the selection
    #[display("no platform selected")]
    NoPlatformSelected,
}

/// Error type for input validation.
///
/// # Examples
///
/// ```
/// use lautrec_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyExcerpt);
/// assert!(format!("{}", err).contains("excerpt required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

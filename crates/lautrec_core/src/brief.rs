//! The generation brief: excerpt plus platform selection.

use crate::PlatformSelection;
use lautrec_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Input to a generation request.
///
/// # Examples
///
/// ```
/// use lautrec_core::{GenerationBrief, PlatformSelection};
///
/// let brief = GenerationBrief::new(
///     "Company X launches new product",
///     PlatformSelection::all(),
/// );
/// assert!(brief.validate().is_ok());
///
/// let empty = GenerationBrief::new("   ", PlatformSelection::all());
/// assert!(empty.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationBrief {
    /// The user-supplied source text used as the basis for generated copy
    pub excerpt: String,
    /// Which platforms to generate for
    pub platforms: PlatformSelection,
}

impl GenerationBrief {
    /// Create a new brief. Validation is deferred to [`validate`](Self::validate).
    pub fn new(excerpt: impl Into<String>, platforms: PlatformSelection) -> Self {
        Self {
            excerpt: excerpt.into(),
            platforms,
        }
    }

    /// Check the request preconditions.
    ///
    /// The excerpt must be non-empty after trimming, and at least one
    /// platform flag must be set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.excerpt.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyExcerpt));
        }
        if !self.platforms.any() {
            return Err(ValidationError::new(ValidationErrorKind::NoPlatformSelected));
        }
        Ok(())
    }
}

//! Trait definitions for generative-content backends.

use async_trait::async_trait;
use lautrec_core::{GeneratedContent, GenerationBrief, ImageData};
use lautrec_error::LautrecResult;

/// The text-generation stage: turn an excerpt and platform selection into
/// platform-tailored post copy.
///
/// This call is the sole source of [`GeneratedContent`]. Implementations
/// populate only the fields the brief selected.
#[async_trait]
pub trait ContentComposer: Send + Sync {
    /// Generate post copy for the selected platforms.
    async fn compose(&self, brief: &GenerationBrief) -> LautrecResult<GeneratedContent>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier the composer targets.
    fn model_name(&self) -> &str;
}

/// The image-generation stage: turn a graphic caption into an image.
///
/// Callers treat failures here as non-fatal; the caption renders text-only
/// when no image arrives.
#[async_trait]
pub trait ImagePainter: Send + Sync {
    /// Generate an image for a short caption.
    async fn paint(&self, caption: &str) -> LautrecResult<ImageData>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier the painter targets.
    fn model_name(&self) -> &str;
}

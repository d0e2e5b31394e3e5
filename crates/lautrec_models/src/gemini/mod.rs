//! Google Gemini API client implementations.
//!
//! This module provides the two provider clients Lautrec uses:
//! - [`GeminiComposer`] - text-generation client producing structured post copy
//! - [`GeminiPainter`] - REST client for the Imagen predict endpoint
//!
//! Both read their API key from the `GEMINI_API_KEY` environment variable.

mod composer;
mod painter;

pub use composer::GeminiComposer;
pub use painter::GeminiPainter;

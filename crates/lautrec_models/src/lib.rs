//! Generative provider integrations for Lautrec.
//!
//! This crate implements the [`lautrec_interface`] traits against Google's
//! generative APIs: [`GeminiComposer`] produces platform-tailored post copy
//! as structured JSON, and [`GeminiPainter`] renders graphic captions into
//! images via the Imagen predict endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod gemini;

pub use config::{ComposerConfig, LautrecConfig, PainterConfig};
pub use extraction::{extract_json, parse_json};
pub use gemini::{GeminiComposer, GeminiPainter};

//! Lautrec - Social Content Studio
//!
//! Lautrec turns a text excerpt into platform-tailored social media posts
//! (LinkedIn, Facebook, X/Twitter, and a graphic caption with an
//! AI-generated image) and lets the caller simulate scheduling those posts in
//! local, in-memory state.
//!
//! # Features
//!
//! - **Two-stage generation**: the text result is observable immediately; the
//!   image stage runs as an independent, best-effort enhancement
//! - **Trait seams**: `ContentComposer` and `ImagePainter` keep providers
//!   swappable and the orchestration testable
//! - **Gemini providers**: structured JSON post copy plus Imagen graphics
//! - **Schedule simulation**: an in-memory board kept sorted by send time
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lautrec::{GeminiComposer, GeminiPainter, GenerationBrief, PlatformSelection, Studio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = Studio::new(GeminiComposer::new()?, GeminiPainter::new()?);
//!     let brief = GenerationBrief::new(
//!         "Company X launches new product",
//!         PlatformSelection::all(),
//!     );
//!     let content = studio.generate(brief).await?;
//!     println!("{:?}", content.linkedin_post);
//!     studio.settle().await; // wait for the image stage
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Lautrec is organized as a workspace with focused crates:
//!
//! - `lautrec_core` - Core data types (Platform, GeneratedContent, etc.)
//! - `lautrec_interface` - ContentComposer and ImagePainter traits
//! - `lautrec_error` - Error types
//! - `lautrec_models` - Gemini provider implementations and configuration
//! - `lautrec_studio` - Generation orchestration and the schedule board
//!
//! This crate (`lautrec`) re-exports everything for convenience.

// Re-export workspace crates
pub use lautrec_core::*;
pub use lautrec_error::*;
pub use lautrec_interface::*;
pub use lautrec_models::*;
pub use lautrec_studio::*;

// OpenTelemetry observability stack
#[cfg(feature = "observability")]
pub mod observability;

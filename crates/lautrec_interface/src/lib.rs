//! Trait definitions for the Lautrec social content studio.
//!
//! This crate provides the seams between the orchestration layer and the
//! generative-content service: [`ContentComposer`] for the text stage and
//! [`ImagePainter`] for the image stage.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentComposer, ImagePainter};

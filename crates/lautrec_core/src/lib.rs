//! Core data types for the Lautrec social content studio.
//!
//! This crate provides the foundation data types used across all Lautrec
//! interfaces: the platform enum and selection flags, the generation brief,
//! the generated content model, and the scheduled post record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brief;
mod content;
mod image;
mod platform;
mod schedule;
mod selection;

pub use brief::GenerationBrief;
pub use content::{FacebookPost, GeneratedContent, GraphicText, LinkedinPost, TwitterPost};
pub use image::ImageData;
pub use platform::Platform;
pub use schedule::ScheduledPost;
pub use selection::PlatformSelection;

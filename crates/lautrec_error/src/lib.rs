//! Error types for the Lautrec social content studio.
//!
//! This crate provides the foundation error types used throughout the Lautrec
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lautrec_error::{LautrecResult, HttpError};
//!
//! fn fetch_data() -> LautrecResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod config;
mod error;
mod gemini;
mod http;
mod image;
mod json;
mod studio;
mod validation;

pub use compose::{ComposeError, ComposeErrorKind};
pub use config::ConfigError;
pub use error::{LautrecError, LautrecErrorKind, LautrecResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind};
pub use json::JsonError;
pub use studio::{StudioError, StudioErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

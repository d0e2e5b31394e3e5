//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! lautrec binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, GenerateArgs, OutputFormat};
pub use run::run_generate;

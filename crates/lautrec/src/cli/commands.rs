//! CLI command definitions.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lautrec - generate platform-tailored social posts from a text excerpt
#[derive(Parser, Debug)]
#[command(name = "lautrec")]
#[command(about = "Social content studio: post generation with schedule simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate social posts from an excerpt
    Generate(GenerateArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source excerpt text
    #[arg(long, conflicts_with = "file")]
    pub excerpt: Option<String>,

    /// Read the excerpt from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Generate a LinkedIn post
    #[arg(long)]
    pub linkedin: bool,

    /// Generate a Facebook post
    #[arg(long)]
    pub facebook: bool,

    /// Generate an X/Twitter post
    #[arg(long)]
    pub twitter: bool,

    /// Generate a graphic caption and image
    #[arg(long)]
    pub graphic: bool,

    /// Select every platform
    #[arg(long, conflicts_with_all = ["linkedin", "facebook", "twitter", "graphic"])]
    pub all: bool,

    /// Print the text result immediately without waiting for the image stage
    #[arg(long)]
    pub no_image: bool,

    /// Simulate scheduling the generated posts at an RFC 3339 time
    #[arg(long)]
    pub schedule_at: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable sections per platform
    Human,
    /// Pretty-printed JSON
    Json,
}

//! Lautrec CLI binary.
//!
//! This binary provides command-line access to Lautrec's functionality:
//! - Generate platform-tailored social posts from a text excerpt
//! - Wait for (or skip) the graphic image stage
//! - Simulate scheduling the generated posts to a future time

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate};

    // Load .env (GEMINI_API_KEY) if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }
    }

    Ok(())
}

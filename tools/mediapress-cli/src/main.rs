//! MediaPress CLI — Command-line interface for quality-tier media export.
//!
//! Usage:
//!   mediapress export [OPTIONS]    Run the export sequence
//!   mediapress codecs              Show the quality tier → codec pair table

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "mediapress",
    about = "Quality-tier media export with matched codec pairs",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the export sequence for a quality tier
    Export {
        /// Quality tier (low, high, master); prompts interactively when omitted
        #[arg(short, long)]
        quality: Option<String>,

        /// Destination folder named in the export output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Label describing the media payload
        #[arg(long)]
        label: Option<String>,
    },

    /// Show the quality tier → codec pair table
    Codecs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    mediapress_common::logging::init_logging(&mediapress_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Export {
            quality,
            output,
            label,
        } => commands::export::run(quality, output, label),
        Commands::Codecs => commands::codecs::run(),
    }
}

//! playhead CLI - inspect scene timeline data from the command line.
//!
//! Two subcommands cover the derived data a scene player renders:
//! `sprites` parses a WebVTT sprite cue list, `layout` computes the layer
//! and color assignment for a marker snapshot.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "playhead",
    version = playhead::VERSION,
    about = "Inspect scene timeline data: sprite cue lists and marker layouts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a sprite cue list and print its frames
    Sprites {
        /// Path to the WebVTT sprite file
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute the layer and color assignment for a marker snapshot
    Layout {
        /// Path to a JSON array of markers
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sprites { file, json } => commands::sprites::run(&file, json),
        Commands::Layout { file, json } => commands::layout::run(&file, json),
    }
}

//! # Tidepath CLI Module
//!
//! This module implements the CLI interface for Tidepath.
//!
//! ## Available Commands
//!
//! - `info` - Show graph dimensions and loader diagnostics
//! - `route` - Answer a single shortest-path query
//! - `batch` - Answer one query per stdin line

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tidepath_core::TidepathError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Tidepath - Periodic Shortest Paths
///
/// Shortest paths in a directed graph whose edge costs rotate with the
/// number of hops taken: each edge carries one weight per phase, and a
/// hop pays the weight of its departure phase.
#[derive(Parser, Debug)]
#[command(name = "tidepath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Treat malformed graph lines as fatal instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show graph dimensions and loader diagnostics
    Info {
        /// Path to the graph file
        graph: PathBuf,
    },

    /// Answer a single shortest-path query
    Route {
        /// Path to the graph file
        graph: PathBuf,

        /// Start vertex
        start: usize,

        /// End vertex
        end: usize,
    },

    /// Read `start end` query pairs from stdin, one per line, and answer
    /// each on its own output line
    Batch {
        /// Path to the graph file
        graph: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), TidepathError> {
    let json_mode = cli.json_mode;
    let strict = cli.strict;

    match cli.command {
        Commands::Info { graph } => cmd_info(&graph, strict, json_mode),
        Commands::Route { graph, start, end } => cmd_route(&graph, strict, json_mode, start, end),
        Commands::Batch { graph } => cmd_batch(&graph, strict, json_mode),
    }
}

//! # Tidepath - Periodic Shortest Paths
//!
//! The main binary for the Tidepath periodic-weight shortest-path engine.
//!
//! This application provides:
//! - Graph loading from an edge-list text file
//! - One-shot and batch (stdin) shortest-path queries
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │              apps/tidepath (THE BINARY)            │
//! │                                                    │
//! │   ┌─────────────┐          ┌──────────────────┐    │
//! │   │    CLI      │          │  stdin batch     │    │
//! │   │   (clap)    │          │  query loop      │    │
//! │   └──────┬──────┘          └────────┬─────────┘    │
//! │          │                          │              │
//! │          └──────────┬───────────────┘              │
//! │                     ▼                              │
//! │            ┌─────────────────┐                     │
//! │            │  tidepath-core  │                     │
//! │            │   (THE LOGIC)   │                     │
//! │            └─────────────────┘                     │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! tidepath info graph.txt
//! tidepath route graph.txt 0 5
//! printf '0 5\n2 3\n' | tidepath batch graph.txt
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — TIDEPATH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("TIDEPATH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tidepath=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments and execute
    let cli = cli::Cli::parse();
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

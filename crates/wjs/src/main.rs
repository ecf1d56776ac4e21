//! wjs CLI - Declarative Wiki.js page management.
//!
//! Provides commands for:
//! - `apply`: Reconcile one page with its desired state

mod commands;
mod error;
mod output;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ApplyArgs;
use output::Output;

/// wjs - Declarative Wiki.js page management.
#[derive(Parser)]
#[command(name = "wjs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a page with its desired state.
    Apply(ApplyArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Logs go to stderr; stdout is reserved for the result document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Apply(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

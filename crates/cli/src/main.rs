//! CLOAK CLI - Command-line interface for CLOAK
//!
//! Usage:
//!   cloak check --config cloak.json --roles editor   - Evaluate widget visibility
//!   cloak check --config cloak.json --anonymous      - Evaluate as a visitor
//!   cloak roles --config cloak.json                  - List known roles
//!   cloak widgets --config cloak.json                - List widget placements

mod commands;

use clap::{Parser, Subcommand};
use commands::{CheckCommand, RolesCommand, WidgetsCommand};

#[derive(Parser)]
#[command(name = "cloak")]
#[command(about = "CLOAK - Role-gated widget visibility")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate widget visibility for a user
    Check(CheckCommand),
    /// List roles known to the configuration
    Roles(RolesCommand),
    /// List widget placements and their restrictions
    Widgets(WidgetsCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(cmd) => cmd.run(),
        Commands::Roles(cmd) => cmd.run(),
        Commands::Widgets(cmd) => cmd.run(),
    }
}

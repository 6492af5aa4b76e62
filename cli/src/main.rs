mod commands;
mod scenario;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Inspect equipment slot rules and replay trigger scenarios")]
struct Cli {
    /// Rule file; defaults to the user config directory
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which trigger sources the rules would register
    Check,
    /// Feed a scenario of game events through the trigger engine
    Replay {
        #[arg(short, long)]
        scenario: PathBuf,
    },
}

/// Initialize logging to stderr, `info` unless RUST_LOG says otherwise.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();
    let rules = cli
        .rules
        .or_else(stow_core::config::default_rules_path)
        .ok_or("error: no --rules given and no config directory available")?;

    match &cli.command {
        Commands::Check => commands::check(&rules),
        Commands::Replay { scenario } => commands::replay(&rules, scenario),
    }
}

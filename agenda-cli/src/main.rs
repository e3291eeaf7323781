//! Agenda — render client meeting agendas from a JSON data document.
//!
//! # Usage
//!
//! ```text
//! agenda init [DIR]
//! agenda render [--config FILE] [--data SRC] [-o FILE] [-t DIR] [--bar-scale S] [--dry-run]
//! agenda check [--config FILE] [--data SRC] [-o FILE] [--json]
//! agenda diff [--config FILE] [--data SRC] [-o FILE]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, diff::DiffArgs, init::InitArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "agenda",
    version,
    about = "Render client meeting agendas from a JSON data document",
    long_about = None,
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold agenda.yaml and a sample data.json.
    Init(InitArgs),

    /// Load the data document and write the agenda page.
    Render(RenderArgs),

    /// Load and bind without writing; report warnings and output status.
    Check(CheckArgs),

    /// Show a unified diff of what render would write.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

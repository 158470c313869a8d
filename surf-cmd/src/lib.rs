//! Command implementations for the surf CLI.
//!
//! Provides subcommands for inspecting and validating the static forecast
//! tables, read either from a local data directory or from a deployed
//! site's base URL.

use clap::Subcommand;

pub mod query;
pub mod source;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// List all beaches in the details table
    Beaches {
        #[command(flatten)]
        source: source::SourceArgs,
    },

    /// Print one beach's 4-day forecast window with computed ratings
    Conditions {
        #[command(flatten)]
        source: source::SourceArgs,

        /// Beach id to inspect
        #[arg(short, long)]
        beach_id: u32,
    },

    /// Print one beach's recorded tide extrema and the interpolated curve
    Tides {
        #[command(flatten)]
        source: source::SourceArgs,

        /// Beach id to inspect
        #[arg(short, long)]
        beach_id: u32,
    },

    /// Parse all three tables and report row counts and coverage gaps
    Validate {
        #[command(flatten)]
        source: source::SourceArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Beaches { source } => query::run_beaches(&source).await,
        Command::Conditions { source, beach_id } => query::run_conditions(&source, beach_id).await,
        Command::Tides { source, beach_id } => query::run_tides(&source, beach_id).await,
        Command::Validate { source } => validate::run_validate(&source).await,
    }
}

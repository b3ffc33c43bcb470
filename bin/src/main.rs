//! pacsize CLI - PACS storage, bandwidth and equipment-tier estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "pacsize")]
#[command(about = "PACS storage and bandwidth estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print storage, bandwidth and tier for a set of rows
    Estimate {
        /// JSON scenario file with `window_days` and `rows`. Defaults to the example rows.
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Row as MODALITY:DEVICES:STUDIES_PER_DAY:STUDY_SIZE_MB (repeatable). Replaces scenario rows.
        #[arg(short, long = "row", value_name = "ROW")]
        rows: Vec<String>,

        /// Projection window in days (1, 31, 180, 365, 1095, 1825) or alias (1d, 1m, 6m, 1y, 3y, 5y)
        #[arg(short, long)]
        window: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Edit the table step by step and watch the estimate update
    Interactive {
        /// JSON scenario file to start from. Defaults to the example rows.
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },

    /// Compare totals for the same rows across every window preset
    Periods {
        /// JSON scenario file. Defaults to the example rows.
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Row as MODALITY:DEVICES:STUDIES_PER_DAY:STUDY_SIZE_MB (repeatable). Replaces scenario rows.
        #[arg(short, long = "row", value_name = "ROW")]
        rows: Vec<String>,
    },

    /// List projection window presets
    Windows,

    /// List modality codes
    Modalities,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            scenario,
            rows,
            window,
            format,
            pretty,
        } => commands::estimate::estimate(
            scenario.as_deref(),
            &rows,
            window.as_deref(),
            format,
            pretty,
        ),
        Commands::Interactive { scenario } => {
            commands::interactive::interactive(scenario.as_deref())
        }
        Commands::Periods { scenario, rows } => {
            commands::info::show_periods(scenario.as_deref(), &rows)
        }
        Commands::Windows => commands::list::list_windows(),
        Commands::Modalities => commands::list::list_modalities(),
    }
}

//! report-compare binary
//!
//! Prints JSON results on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use report_compare::commands::{read_input, run_check, run_diff, run_structure};
use report_compare::{CompareConfig, Overrides};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "report-compare")]
#[command(
    version,
    about = "Diff, summarize and validate annual disclosure reports"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Diff two parsed reports and summarize the changes
    Diff {
        /// Earlier report (JSON)
        a: PathBuf,
        /// Later report (JSON)
        b: PathBuf,
        /// TOML file with [diff] and [summary] tables
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, conflicts_with = "no_ignore_whitespace")]
        ignore_whitespace: bool,
        /// Compare whitespace exactly even if the config file ignores it
        #[arg(long)]
        no_ignore_whitespace: bool,
        #[arg(long, conflicts_with = "no_ignore_case")]
        ignore_case: bool,
        /// Compare case exactly even if the config file ignores it
        #[arg(long)]
        no_ignore_case: bool,
        /// Number of most-changed sections to report
        #[arg(long)]
        top_sections: Option<usize>,
        /// Maximum number of key number changes to report
        #[arg(long)]
        max_number_changes: Option<usize>,
    },
    /// Check one year's disclosure tables for arithmetic consistency
    Check {
        /// Disclosure tables (JSON)
        tables: PathBuf,
        /// Previous year's tables, enables the cross-year check
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Parsed report, enables the narrative cross-check
        #[arg(long)]
        document: Option<PathBuf>,
    },
    /// Report structural defects of a parsed report
    Structure {
        document: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `--x` / `--no-x` to an override; neither keeps the config value
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn read_optional(path: Option<&PathBuf>) -> anyhow::Result<Option<String>> {
    path.map(|p| read_input(p)).transpose()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Diff {
            a,
            b,
            config,
            ignore_whitespace,
            no_ignore_whitespace,
            ignore_case,
            no_ignore_case,
            top_sections,
            max_number_changes,
        } => {
            let base = match &config {
                Some(path) => CompareConfig::from_file(path)?,
                None => CompareConfig::default(),
            };
            let config = base.with_overrides(&Overrides {
                ignore_whitespace: flag_pair(ignore_whitespace, no_ignore_whitespace),
                ignore_case: flag_pair(ignore_case, no_ignore_case),
                top_sections,
                max_number_changes,
            });

            tracing::info!(a = %a.display(), b = %b.display(), "comparing reports");
            let comparison = run_diff(&read_input(&a)?, &read_input(&b)?, &config)?;
            tracing::info!(
                assessment = %comparison.summary.overall_assessment,
                "comparison complete"
            );
            print_json(&comparison)
        }
        Command::Check {
            tables,
            previous,
            document,
        } => {
            let previous = read_optional(previous.as_ref())?;
            let document = read_optional(document.as_ref())?;
            let result = run_check(
                &read_input(&tables)?,
                previous.as_deref(),
                document.as_deref(),
            )?;
            tracing::info!(score = result.score, issues = result.issues.len(), "check complete");
            print_json(&result)
        }
        Command::Structure { document } => print_json(&run_structure(&read_input(&document)?)?),
    }
}

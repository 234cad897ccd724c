//! Command-line parsing for the `reach` binary.
//!
//! Argument parsing and command dispatch stay separate from the engine.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::DEFAULT_THRESHOLD_SECS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "reach",
    version,
    about = "Find the roster entries within a maximum travel time of a facility"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve one origin address against the roster and print a report.
    Resolve(ResolveArgs),
    /// Resolve every facility (built-in list or `--origins`) against the roster.
    Sweep(SweepArgs),
    /// Read one JSON request (`{"hospitalAddress": ...}`) from stdin and print the JSON reply.
    Request(RequestArgs),
}

/// Options shared by every command that builds an engine.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Candidate roster (CSV with `name,address` columns, or a JSON array).
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Maximum travel time in seconds (inclusive).
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_SECS)]
    pub threshold: u64,

    /// Timeout for each provider call, in seconds.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Cap on in-flight provider calls per resolution (default: one per roster entry).
    #[arg(long)]
    pub max_concurrency: Option<NonZeroUsize>,
}

#[derive(Debug, Parser, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Origin address.
    #[arg(long)]
    pub origin: String,

    /// Print the `{"agencies": [...]}` reply instead of the report.
    #[arg(long)]
    pub json: bool,

    /// Export per-candidate outcomes to CSV.
    #[arg(long = "export-diagnostics", value_name = "CSV")]
    pub export_diagnostics: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Origin roster to use instead of the built-in facilities.
    #[arg(long, value_name = "FILE")]
    pub origins: Option<PathBuf>,

    /// Export per-facility results to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct RequestArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        let cli = Cli::parse_from(["reach", "resolve", "--roster", "agencies.csv", "--origin", "1 Rue A"]);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.engine.threshold, 5400);
        assert_eq!(args.engine.timeout, 10);
        assert!(args.engine.max_concurrency.is_none());
        assert!(!args.json);
    }

    #[test]
    fn zero_timeout_and_concurrency_are_rejected() {
        assert!(Cli::try_parse_from(["reach", "request", "--roster", "r.csv", "--timeout", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["reach", "request", "--roster", "r.csv", "--max-concurrency", "0"]).is_err()
        );
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

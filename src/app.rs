//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - builds the engine (credential, roster, settings)
//! - prints reports / replies and writes optional exports

use std::io::Read;

use clap::Parser;

use crate::api::handle_proximity_request;
use crate::cli::{Command, RequestArgs, ResolveArgs, SweepArgs};
use crate::data::builtin_facilities;
use crate::error::{AppError, ErrorKind};

pub mod pipeline;

/// Entry point for the `reach` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Resolve(args) => handle_resolve(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Request(args) => handle_request(args),
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A second init (e.g. from an embedding test) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn handle_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let engine = pipeline::build_engine(&args.engine)?;
    let resolution = engine.resolve_address(&args.origin)?;

    if args.json {
        let json = serde_json::to_string(&resolution.result)
            .map_err(|e| AppError::runtime(format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_resolution(&resolution));
    }

    if let Some(path) = &args.export_diagnostics {
        crate::io::export::write_diagnostics_csv(path, &resolution)?;
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let engine = pipeline::build_engine(&args.engine)?;

    let facilities = match &args.origins {
        Some(path) => crate::io::roster::load_roster(path)?.roster,
        None => builtin_facilities(),
    };

    let book = pipeline::sweep(&engine, &facilities);
    let threshold = engine.config().threshold_secs;
    println!("{}", crate::report::format_sweep(&book, threshold));

    if let Some(path) = &args.export {
        crate::io::export::write_sweep_json(path, &book, threshold)?;
    }

    Ok(())
}

fn handle_request(args: RequestArgs) -> Result<(), AppError> {
    let engine = pipeline::build_engine(&args.engine)?;

    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| AppError::runtime(format!("Failed to read request from stdin: {e}")))?;

    let reply = handle_proximity_request(&engine, &body);
    println!("{}", reply.to_json());

    if reply.is_success() {
        return Ok(());
    }
    let kind = if reply.status == 400 {
        ErrorKind::RequestMalformed
    } else {
        ErrorKind::Runtime
    };
    Err(AppError::new(kind, format!("Request failed with status {}.", reply.status)))
}

//! `reach` library crate.
//!
//! Given an origin address and a roster of named addresses, find the roster
//! entries within a maximum travel time, using a distance-matrix provider.
//!
//! The binary (`reach`) is a thin wrapper around this library so that:
//!
//! - the engine is testable with synthetic rosters and providers
//! - the same engine can sit behind other front-ends (an HTTP handler, a job)

pub mod api;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod report;

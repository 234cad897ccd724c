//! Domain types shared by the engine, the inbound handler, and the CLI.
//!
//! This module defines:
//!
//! - locations and rosters (`Location`, `Roster`)
//! - per-pair travel outcomes (`TravelOutcome`, `CandidateOutcome`)
//! - resolution outputs (`ResolutionResult`, `Resolution`, `OutcomeTally`)
//! - engine settings (`EngineConfig`)

pub mod types;

pub use types::*;

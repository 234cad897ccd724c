//! Input/output helpers.
//!
//! - roster ingest + validation (`roster`)
//! - sweep and diagnostics exports (`export`)

pub mod export;
pub mod roster;

pub use export::*;
pub use roster::*;

//! Proximity resolution.
//!
//! Responsibilities:
//!
//! - evaluate one (origin, candidate) pair against the provider (`fetcher`)
//! - fan out over the roster and wait for every pair (`resolver`)
//! - keep the candidates within the threshold, in roster order (`filter`)

pub mod fetcher;
pub mod filter;
pub mod resolver;

pub use fetcher::*;
pub use filter::*;
pub use resolver::*;

#[cfg(test)]
pub(crate) mod testing;

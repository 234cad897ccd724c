//! Shared domain types.
//!
//! These live for a single resolution at most. The serializable ones double as
//! the JSON shapes of the inbound reply and the sweep export.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Travel time in whole seconds, as reported by the provider.
pub type Seconds = u64;

/// Default maximum travel time (90 minutes).
pub const DEFAULT_THRESHOLD_SECS: Seconds = 5400;

/// Per-call provider timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A named address.
///
/// Origins only need an address; roster candidates need both fields non-empty
/// (enforced at ingest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    pub address: String,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// An unnamed query origin.
    pub fn origin(address: impl Into<String>) -> Self {
        Self::new(String::new(), address)
    }

    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// Name for display; falls back to the address for unnamed origins.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.address
        } else {
            &self.name
        }
    }
}

/// Ordered candidate list. Duplicates are allowed and kept.
pub type Roster = Vec<Location>;

/// Result of evaluating one (origin, candidate) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelOutcome {
    /// Provider-reported travel time.
    Duration(Seconds),
    /// The provider answered but reported a non-OK status for the pair.
    Unreachable { status: String },
    /// Network failure, non-2xx reply, timeout, or a reply that breaks the
    /// expected shape.
    TransportError { reason: String },
}

impl TravelOutcome {
    pub fn unreachable(status: impl Into<String>) -> Self {
        Self::Unreachable {
            status: status.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportError {
            reason: reason.into(),
        }
    }

    pub fn duration_secs(&self) -> Option<Seconds> {
        match self {
            TravelOutcome::Duration(secs) => Some(*secs),
            _ => None,
        }
    }

    /// Inclusive threshold test. Failures never qualify.
    pub fn is_within(&self, threshold: Seconds) -> bool {
        matches!(self, TravelOutcome::Duration(secs) if *secs <= threshold)
    }

    /// Stable short label for exports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            TravelOutcome::Duration(_) => "duration",
            TravelOutcome::Unreachable { .. } => "unreachable",
            TravelOutcome::TransportError { .. } => "transport_error",
        }
    }

    /// Provider status or failure reason, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TravelOutcome::Duration(_) => None,
            TravelOutcome::Unreachable { status } => Some(status),
            TravelOutcome::TransportError { reason } => Some(reason),
        }
    }
}

/// Names of the candidates within the threshold, in roster order.
///
/// Serializes as the inbound reply body: `{ "agencies": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub agencies: Vec<String>,
}

impl ResolutionResult {
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }
}

/// One roster entry paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOutcome {
    pub candidate: Location,
    pub outcome: TravelOutcome,
}

/// Counts of outcomes by class for one resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub reachable: usize,
    pub beyond_threshold: usize,
    pub unreachable: usize,
    pub transport_errors: usize,
}

impl OutcomeTally {
    pub fn total(&self) -> usize {
        self.reachable + self.beyond_threshold + self.unreachable + self.transport_errors
    }

    pub fn failures(&self) -> usize {
        self.unreachable + self.transport_errors
    }
}

/// Full answer of one resolution: the filtered names plus diagnostics.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub origin: Location,
    pub threshold_secs: Seconds,
    pub result: ResolutionResult,
    /// Exactly one entry per roster entry, in roster order.
    pub outcomes: Vec<CandidateOutcome>,
    pub tally: OutcomeTally,
}

/// Engine settings, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Inclusive maximum travel time.
    pub threshold_secs: Seconds,
    /// Bound on each provider call.
    pub timeout: Duration,
    /// Maximum in-flight provider calls per resolution. `None` means one
    /// worker per roster entry, up to `engine::DEFAULT_MAX_WORKERS`.
    pub max_concurrency: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold_secs: DEFAULT_THRESHOLD_SECS,
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: None,
        }
    }
}

/// Outcome of resolving one facility during a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResult {
    pub facility_name: String,
    pub agencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

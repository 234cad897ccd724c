//! Travel-time fetching for a single pair.

use crate::domain::{Location, TravelOutcome};

/// Source of travel times.
///
/// Implementations perform one attempt per call and fold every failure into
/// the returned outcome. `Sync` because one provider serves all fan-out workers.
pub trait TravelTimeProvider: Sync {
    fn travel_time(&self, origin: &str, destination: &str) -> TravelOutcome;
}

/// Evaluate one roster candidate from `origin`.
pub fn fetch_outcome<P: TravelTimeProvider + ?Sized>(
    provider: &P,
    origin: &Location,
    candidate: &Location,
) -> TravelOutcome {
    log::debug!("travel time {:?} -> {:?}", origin.address, candidate.address);

    let outcome = provider.travel_time(&origin.address, &candidate.address);
    match &outcome {
        TravelOutcome::Duration(secs) => {
            log::debug!("{}: {secs}s", candidate.label());
        }
        TravelOutcome::Unreachable { status } => {
            log::debug!("{}: unreachable ({status})", candidate.label());
        }
        TravelOutcome::TransportError { reason } => {
            log::warn!("{}: provider call failed: {reason}", candidate.label());
        }
    }
    outcome
}

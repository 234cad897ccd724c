//! Threshold filtering and aggregation of per-pair outcomes.

use crate::domain::{CandidateOutcome, Location, OutcomeTally, ResolutionResult, Seconds, TravelOutcome};

/// Pair each roster entry with its outcome (same index).
pub fn pair_outcomes(roster: &[Location], outcomes: Vec<TravelOutcome>) -> Vec<CandidateOutcome> {
    debug_assert_eq!(roster.len(), outcomes.len());
    roster
        .iter()
        .cloned()
        .zip(outcomes)
        .map(|(candidate, outcome)| CandidateOutcome { candidate, outcome })
        .collect()
}

/// Names whose duration is `<= threshold`, in roster order. No dedup.
pub fn within_threshold(outcomes: &[CandidateOutcome], threshold: Seconds) -> ResolutionResult {
    let agencies = outcomes
        .iter()
        .filter(|c| c.outcome.is_within(threshold))
        .map(|c| c.candidate.name.clone())
        .collect();
    ResolutionResult { agencies }
}

pub fn tally(outcomes: &[CandidateOutcome], threshold: Seconds) -> OutcomeTally {
    let mut t = OutcomeTally::default();
    for c in outcomes {
        match &c.outcome {
            TravelOutcome::Duration(secs) if *secs <= threshold => t.reachable += 1,
            TravelOutcome::Duration(_) => t.beyond_threshold += 1,
            TravelOutcome::Unreachable { .. } => t.unreachable += 1,
            TravelOutcome::TransportError { .. } => t.transport_errors += 1,
        }
    }
    t
}

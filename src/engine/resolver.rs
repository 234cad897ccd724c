//! Fan-out over the roster with a join-all barrier.
//!
//! Each candidate is evaluated as its own task on a dedicated rayon pool. The
//! indexed `collect` writes every outcome into the slot of its roster entry, so
//! results come back in roster order whatever the completion order was, and
//! the call returns only once every pair has settled.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::domain::{EngineConfig, Location, Resolution, ResolutionResult, Roster, Seconds, TravelOutcome};
use crate::engine::fetcher::{TravelTimeProvider, fetch_outcome};
use crate::engine::filter::{pair_outcomes, tally, within_threshold};
use crate::error::AppError;

/// Worker ceiling when no concurrency cap is configured.
pub const DEFAULT_MAX_WORKERS: usize = 64;

/// Resolver bound to one roster, threshold, and provider.
///
/// Holds only read-only state; concurrent `resolve` calls are independent.
pub struct ProximityEngine<P> {
    provider: P,
    roster: Roster,
    config: EngineConfig,
}

impl<P: TravelTimeProvider> ProximityEngine<P> {
    pub fn new(provider: P, roster: Roster, config: EngineConfig) -> Result<Self, AppError> {
        if config.max_concurrency == Some(0) {
            return Err(AppError::config("Max concurrency must be at least 1."));
        }
        Ok(Self {
            provider,
            roster,
            config,
        })
    }

    pub fn roster(&self) -> &[Location] {
        &self.roster
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve the roster from `origin`, keeping per-candidate diagnostics.
    pub fn resolve(&self, origin: &Location) -> Result<Resolution, AppError> {
        resolve_detailed(&self.provider, origin, &self.roster, &self.config)
    }

    pub fn resolve_address(&self, address: &str) -> Result<Resolution, AppError> {
        self.resolve(&Location::origin(address))
    }
}

/// Names of the roster entries reachable from `origin` within `threshold`.
///
/// One provider call per entry, up to `DEFAULT_MAX_WORKERS` in flight at once.
pub fn resolve<P: TravelTimeProvider + ?Sized>(
    provider: &P,
    origin: &Location,
    roster: &[Location],
    threshold: Seconds,
) -> Result<ResolutionResult, AppError> {
    let config = EngineConfig {
        threshold_secs: threshold,
        ..EngineConfig::default()
    };
    Ok(resolve_detailed(provider, origin, roster, &config)?.result)
}

fn resolve_detailed<P: TravelTimeProvider + ?Sized>(
    provider: &P,
    origin: &Location,
    roster: &[Location],
    config: &EngineConfig,
) -> Result<Resolution, AppError> {
    if !origin.has_address() {
        return Err(AppError::malformed("Missing origin address."));
    }

    let outcomes = evaluate_roster(provider, origin, roster, config.max_concurrency)?;
    let outcomes = pair_outcomes(roster, outcomes);
    let result = within_threshold(&outcomes, config.threshold_secs);
    let tally = tally(&outcomes, config.threshold_secs);

    log::info!(
        "resolved {:?}: {} of {} within {}s ({} beyond, {} failed: {} unreachable, {} transport errors)",
        origin.label(),
        tally.reachable,
        tally.total(),
        config.threshold_secs,
        tally.beyond_threshold,
        tally.failures(),
        tally.unreachable,
        tally.transport_errors,
    );

    Ok(Resolution {
        origin: origin.clone(),
        threshold_secs: config.threshold_secs,
        result,
        outcomes,
        tally,
    })
}

/// Evaluate every roster entry and wait for all of them.
///
/// Returns exactly `roster.len()` outcomes in roster order. An empty roster
/// issues no calls.
pub fn evaluate_roster<P: TravelTimeProvider + ?Sized>(
    provider: &P,
    origin: &Location,
    roster: &[Location],
    max_concurrency: Option<usize>,
) -> Result<Vec<TravelOutcome>, AppError> {
    if roster.is_empty() {
        return Ok(Vec::new());
    }

    let workers = worker_count(roster.len(), max_concurrency);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("reach-fetch-{i}"))
        .build()
        .map_err(|e| AppError::runtime(format!("Failed to start fetch workers: {e}")))?;

    let outcomes: Vec<TravelOutcome> = pool.install(|| {
        roster
            .par_iter()
            .with_max_len(1)
            .map(|candidate| fetch_outcome(provider, origin, candidate))
            .collect()
    });

    Ok(outcomes)
}

/// Pool size: the configured cap, else one worker per entry up to
/// `DEFAULT_MAX_WORKERS`; never more workers than entries.
fn worker_count(roster_len: usize, max_concurrency: Option<usize>) -> usize {
    max_concurrency
        .unwrap_or(DEFAULT_MAX_WORKERS)
        .min(roster_len)
        .max(1)
}

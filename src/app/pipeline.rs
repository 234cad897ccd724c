//! Shared engine setup and the facility sweep.
//!
//! Every command builds the engine the same way:
//! settings -> credential -> roster -> engine

use std::time::Duration;

use crate::cli::EngineArgs;
use crate::data::DistanceMatrixClient;
use crate::domain::{EngineConfig, FacilityResult, Location};
use crate::engine::{ProximityEngine, TravelTimeProvider};
use crate::error::AppError;
use crate::report::ResultBook;

pub fn engine_config_from_args(args: &EngineArgs) -> EngineConfig {
    EngineConfig {
        threshold_secs: args.threshold,
        timeout: Duration::from_secs(args.timeout),
        max_concurrency: args.max_concurrency.map(|n| n.get()),
    }
}

/// Build an engine backed by the distance-matrix provider.
///
/// The credential is checked before the roster is read.
pub fn build_engine(args: &EngineArgs) -> Result<ProximityEngine<DistanceMatrixClient>, AppError> {
    let config = engine_config_from_args(args);
    let client = DistanceMatrixClient::from_env(config.timeout)?;

    let loaded = crate::io::roster::load_roster(&args.roster)?;
    let engine = ProximityEngine::new(client, loaded.roster, config)?;
    if engine.roster().is_empty() {
        log::warn!("roster '{}' has no usable entries", args.roster.display());
    }
    Ok(engine)
}

/// Resolve every facility in order.
///
/// A facility that cannot be resolved gets an `error` entry; the rest of the
/// sweep continues.
pub fn sweep<P: TravelTimeProvider>(engine: &ProximityEngine<P>, facilities: &[Location]) -> ResultBook {
    let mut book = ResultBook::default();

    for facility in facilities {
        let result = match engine.resolve(facility) {
            Ok(resolution) => FacilityResult {
                facility_name: facility.label().to_string(),
                agencies: resolution.result.agencies,
                error: None,
            },
            Err(err) => {
                log::warn!("{}: {err}", facility.label());
                FacilityResult {
                    facility_name: facility.label().to_string(),
                    agencies: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };
        book.record(result);
    }

    book
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::TravelOutcome;
    use crate::engine::testing::ScriptedProvider;

    #[test]
    fn config_follows_args() {
        let args = EngineArgs {
            roster: PathBuf::from("r.csv"),
            threshold: 1800,
            timeout: 3,
            max_concurrency: NonZeroUsize::new(4),
        };
        let config = engine_config_from_args(&args);
        assert_eq!(config.threshold_secs, 1800);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_concurrency, Some(4));
    }

    #[test]
    fn sweep_records_every_facility() {
        let provider = ScriptedProvider::new()
            .with("addr-A", TravelOutcome::Duration(600))
            .with("addr-B", TravelOutcome::Duration(6000));
        let engine = ProximityEngine::new(
            provider,
            vec![Location::new("A", "addr-A"), Location::new("B", "addr-B")],
            EngineConfig::default(),
        )
        .unwrap();

        let facilities = vec![
            Location::new("F1", "1 Rue F"),
            Location::new("F2", " "),
            Location::new("F3", "3 Rue F"),
        ];
        let book = sweep(&engine, &facilities);

        assert_eq!(book.len(), 3);
        assert_eq!(book.get("F1").unwrap().agencies, vec!["A"]);
        assert!(book.get("F2").unwrap().error.is_some());
        assert_eq!(book.get("F3").unwrap().agencies, vec!["A"]);
        // F2 never reached the provider.
        assert_eq!(engine.provider().call_count(), 4);
    }

    #[test]
    fn sweep_keeps_one_entry_per_facility_name() {
        let engine = ProximityEngine::new(ScriptedProvider::new(), vec![], EngineConfig::default()).unwrap();
        let facilities = vec![Location::new("F", "a"), Location::new("F", "b")];
        let book = sweep(&engine, &facilities);
        assert_eq!(book.len(), 1);
    }
}

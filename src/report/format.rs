//! Formatted terminal output.
//!
//! Kept apart from the engine so output changes stay local.

use crate::domain::{Resolution, Seconds, TravelOutcome};
use crate::report::ResultBook;

/// Full report for one resolution: settings, tallies, and every candidate.
pub fn format_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    let tally = &resolution.tally;

    out.push_str("=== reach - proximity check ===\n");
    out.push_str(&format!("Origin: {}\n", resolution.origin.address));
    out.push_str(&format!(
        "Threshold: {} ({}s)\n",
        format_duration(resolution.threshold_secs),
        resolution.threshold_secs
    ));
    out.push_str(&format!(
        "Candidates: n={} | within={} beyond={} unreachable={} errors={}\n",
        tally.total(),
        tally.reachable,
        tally.beyond_threshold,
        tally.unreachable,
        tally.transport_errors,
    ));

    out.push_str("\nWithin threshold:\n");
    if resolution.result.is_empty() {
        out.push_str("  (none)\n");
    }
    let mut rank = 0;
    for c in &resolution.outcomes {
        if let TravelOutcome::Duration(secs) = c.outcome {
            if secs <= resolution.threshold_secs {
                rank += 1;
                out.push_str(&format!("{rank:>3}) {:<40} {:>8}\n", c.candidate.name, format_duration(secs)));
            }
        }
    }

    let excluded: Vec<_> = resolution
        .outcomes
        .iter()
        .filter(|c| !c.outcome.is_within(resolution.threshold_secs))
        .collect();
    if !excluded.is_empty() {
        out.push_str("\nExcluded:\n");
        for c in excluded {
            let why = match &c.outcome {
                TravelOutcome::Duration(secs) => format!("{} (beyond threshold)", format_duration(*secs)),
                TravelOutcome::Unreachable { status } => format!("unreachable: {status}"),
                TravelOutcome::TransportError { reason } => format!("error: {reason}"),
            };
            out.push_str(&format!("  - {:<40} {why}\n", c.candidate.name));
        }
    }

    out
}

/// One block per facility.
pub fn format_sweep(book: &ResultBook, threshold_secs: Seconds) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== reach - sweep ({} facilities, threshold {}) ===\n",
        book.len(),
        format_duration(threshold_secs)
    ));

    for r in book.results() {
        out.push_str(&format!("\n{}\n", r.facility_name));
        if let Some(err) = &r.error {
            out.push_str(&format!("  error: {err}\n"));
            continue;
        }
        if r.agencies.is_empty() {
            out.push_str("  (none within threshold)\n");
            continue;
        }
        for name in &r.agencies {
            out.push_str(&format!("  - {name}\n"));
        }
    }

    if book.failed() > 0 {
        out.push_str(&format!("\n{} facility(ies) could not be resolved.\n", book.failed()));
    }

    out
}

/// `5400` -> `1h30m`, `59` -> `0m59s`.
pub fn format_duration(secs: Seconds) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m{seconds:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateOutcome, FacilityResult, Location, OutcomeTally, ResolutionResult};

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(5400), "1h30m");
        assert_eq!(format_duration(3601), "1h00m");
        assert_eq!(format_duration(59), "0m59s");
        assert_eq!(format_duration(1200), "20m00s");
    }

    #[test]
    fn resolution_report_lists_kept_and_excluded() {
        let resolution = Resolution {
            origin: Location::origin("3 Place Harrismendi, 64210 Arbonne"),
            threshold_secs: 1800,
            result: ResolutionResult {
                agencies: vec!["A".to_string()],
            },
            outcomes: vec![
                CandidateOutcome {
                    candidate: Location::new("A", "addr-A"),
                    outcome: TravelOutcome::Duration(1200),
                },
                CandidateOutcome {
                    candidate: Location::new("B", "addr-B"),
                    outcome: TravelOutcome::transport("request timed out"),
                },
            ],
            tally: OutcomeTally {
                reachable: 1,
                transport_errors: 1,
                ..OutcomeTally::default()
            },
        };

        let text = format_resolution(&resolution);
        assert!(text.contains("Origin: 3 Place Harrismendi, 64210 Arbonne"));
        assert!(text.contains("n=2 | within=1 beyond=0 unreachable=0 errors=1"));
        assert!(text.contains("  1) A"));
        assert!(text.contains("error: request timed out"));
    }

    #[test]
    fn sweep_report_shows_errors_and_empty_results() {
        let mut book = ResultBook::default();
        book.record(FacilityResult {
            facility_name: "F1".to_string(),
            agencies: vec![],
            error: None,
        });
        book.record(FacilityResult {
            facility_name: "F2".to_string(),
            agencies: vec![],
            error: Some("Missing origin address.".to_string()),
        });

        let text = format_sweep(&book, 5400);
        assert!(text.contains("(none within threshold)"));
        assert!(text.contains("error: Missing origin address."));
        assert!(text.contains("1 facility(ies) could not be resolved."));
    }
}

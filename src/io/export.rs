//! Exports of sweep results (JSON) and per-candidate diagnostics (CSV).

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{FacilityResult, Resolution, Seconds};
use crate::error::AppError;
use crate::report::ResultBook;

#[derive(Debug, Serialize)]
struct SweepExport<'a> {
    generated_at: DateTime<Utc>,
    threshold_secs: Seconds,
    results: &'a [FacilityResult],
}

/// Write a sweep's per-facility results as pretty JSON.
pub fn write_sweep_json(path: &Path, book: &ResultBook, threshold_secs: Seconds) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create export '{}': {e}", path.display())))?;

    let export = SweepExport {
        generated_at: Utc::now(),
        threshold_secs,
        results: book.results(),
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::runtime(format!("Failed to write sweep export: {e}")))?;

    Ok(())
}

/// Write one row per roster entry, in roster order.
pub fn write_diagnostics_csv(path: &Path, resolution: &Resolution) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::runtime(format!("Failed to create diagnostics CSV '{}': {e}", path.display())))?;

    writer
        .write_record([
            "name",
            "address",
            "outcome",
            "duration_secs",
            "detail",
            "within_threshold",
        ])
        .map_err(|e| AppError::runtime(format!("Failed to write diagnostics CSV header: {e}")))?;

    for c in &resolution.outcomes {
        let duration = c
            .outcome
            .duration_secs()
            .map(|secs| secs.to_string())
            .unwrap_or_default();
        let within = c.outcome.is_within(resolution.threshold_secs).to_string();
        writer
            .write_record([
                c.candidate.name.as_str(),
                c.candidate.address.as_str(),
                c.outcome.label(),
                duration.as_str(),
                c.outcome.detail().unwrap_or(""),
                within.as_str(),
            ])
            .map_err(|e| AppError::runtime(format!("Failed to write diagnostics CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::runtime(format!("Failed to flush diagnostics CSV: {e}")))?;
    Ok(())
}

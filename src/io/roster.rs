//! Roster ingest.
//!
//! Turns a CSV or JSON list of named addresses into a `Roster`. Entries without
//! a name or an address are skipped and reported; the rest keep their file
//! order, duplicates included.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;

use crate::domain::{Location, Roster};
use crate::error::AppError;

/// A skipped entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// CSV line number, or 1-based position in a JSON array.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct LoadedRoster {
    pub roster: Roster,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load a roster file, picking the format from the extension.
pub fn load_roster(path: &Path) -> Result<LoadedRoster, AppError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let open = || {
        File::open(path)
            .map_err(|e| AppError::input(format!("Failed to open roster '{}': {e}", path.display())))
    };

    let loaded = match ext.as_deref() {
        Some("csv") => read_csv_roster(open()?)?,
        Some("json") => read_json_roster(open()?)?,
        _ => {
            return Err(AppError::input(format!(
                "Unsupported roster file '{}'. Expected a .csv or .json file.",
                path.display()
            )));
        }
    };

    if !loaded.row_errors.is_empty() {
        log::warn!(
            "{}: skipped {} of {} entries",
            path.display(),
            loaded.row_errors.len(),
            loaded.rows_read
        );
        for row in &loaded.row_errors {
            log::warn!("{}: skipped {row}", path.display());
        }
    }
    Ok(loaded)
}

/// Read a CSV roster with `name` and `address` columns.
pub fn read_csv_roster<R: Read>(reader: R) -> Result<LoadedRoster, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read roster headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for column in ["name", "address"] {
        if !header_map.contains_key(column) {
            return Err(AppError::input(format!("Missing required column: `{column}`")));
        }
    }

    let mut roster = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let parsed = get_required(&record, &header_map, "name").and_then(|name| {
            get_required(&record, &header_map, "address").map(|address| Location::new(name, address))
        });
        match parsed {
            Ok(location) => roster.push(location),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    Ok(LoadedRoster {
        roster,
        row_errors,
        rows_read,
    })
}

#[derive(Debug, Deserialize)]
struct JsonEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

/// Read a JSON array of `{ "name", "address" }` objects.
pub fn read_json_roster<R: Read>(reader: R) -> Result<LoadedRoster, AppError> {
    let entries: Vec<JsonEntry> = serde_json::from_reader(reader)
        .map_err(|e| AppError::input(format!("Invalid roster JSON: {e}")))?;

    let rows_read = entries.len();
    let mut roster = Vec::with_capacity(rows_read);
    let mut row_errors = Vec::new();

    for (idx, entry) in entries.into_iter().enumerate() {
        let name = entry.name.as_deref().map(str::trim).unwrap_or("");
        let address = entry.address.as_deref().map(str::trim).unwrap_or("");
        let message = match (name.is_empty(), address.is_empty()) {
            (false, false) => {
                roster.push(Location::new(name, address));
                continue;
            }
            (true, _) => "Missing required value: `name`",
            (false, true) => "Missing required value: `address`",
        };
        row_errors.push(RowError {
            line: idx + 1,
            message: message.to_string(),
        });
    }

    Ok(LoadedRoster {
        roster,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn get_required(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Result<String, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

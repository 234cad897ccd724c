//! Reporting: per-facility bookkeeping and terminal output.

pub mod format;

pub use format::*;

use crate::domain::FacilityResult;

/// Per-facility results, in first-recorded order.
#[derive(Debug, Clone, Default)]
pub struct ResultBook {
    results: Vec<FacilityResult>,
}

impl ResultBook {
    /// Insert a result, replacing any earlier one for the same facility.
    pub fn record(&mut self, result: FacilityResult) {
        match self
            .results
            .iter_mut()
            .find(|r| r.facility_name == result.facility_name)
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }

    pub fn get(&self, facility_name: &str) -> Option<&FacilityResult> {
        self.results.iter().find(|r| r.facility_name == facility_name)
    }

    pub fn results(&self) -> &[FacilityResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }
}

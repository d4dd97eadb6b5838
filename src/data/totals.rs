//! Totals Module
//! Typed input for the chart renderer: aggregate pass/fail/warning counts.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TotalsError {
    #[error("Failed to read totals file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse totals JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Test status categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Passed,
    Failed,
    Warning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Passed, Status::Failed, Status::Warning];

    /// Category label as shown on axes and data labels.
    pub fn label(self) -> &'static str {
        match self {
            Status::Passed => "Passed",
            Status::Failed => "Failed",
            Status::Warning => "Warning",
        }
    }
}

/// Aggregate test counts supplied by an external test-run source.
///
/// Immutable for the duration of rendering; both charts are derived from
/// this single value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub passed: u64,
    pub failed: u64,
    pub warning: u64,
}

impl Totals {
    pub fn new(passed: u64, failed: u64, warning: u64) -> Self {
        Self {
            passed,
            failed,
            warning,
        }
    }

    /// Load totals from a JSON file (`{"passed": .., "failed": .., "warning": ..}`).
    pub fn from_json_file(path: &Path) -> Result<Self, TotalsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Raw count for a category.
    pub fn count(&self, status: Status) -> u64 {
        match status {
            Status::Passed => self.passed,
            Status::Failed => self.failed,
            Status::Warning => self.warning,
        }
    }

    /// Total number of tests across all categories.
    pub fn sum(&self) -> u64 {
        self.passed + self.failed + self.warning
    }

    /// True if at least one test was recorded.
    pub fn has_data(&self) -> bool {
        self.sum() > 0
    }

    /// Fraction of the total for a category.
    ///
    /// Returns `None` when no tests were recorded, so callers decide the
    /// no-data presentation instead of propagating NaN.
    pub fn fraction(&self, status: Status) -> Option<f64> {
        let sum = self.sum();
        if sum == 0 {
            None
        } else {
            Some(self.count(status) as f64 / sum as f64)
        }
    }

    /// Percentage of the total for a category (0.0 to 100.0).
    pub fn percent(&self, status: Status) -> Option<f64> {
        self.fraction(status).map(|f| f * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_sum_to_one() {
        let totals = Totals::new(8, 1, 1);
        let sum: f64 = Status::ALL
            .iter()
            .map(|&s| totals.fraction(s).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn percent_matches_count_over_sum() {
        let totals = Totals::new(8, 1, 1);
        assert_eq!(totals.percent(Status::Passed), Some(80.0));
        assert_eq!(totals.percent(Status::Failed), Some(10.0));
        assert_eq!(totals.percent(Status::Warning), Some(10.0));
    }

    #[test]
    fn zero_sum_has_no_fractions() {
        let totals = Totals::new(0, 0, 0);
        assert!(!totals.has_data());
        for status in Status::ALL {
            assert_eq!(totals.fraction(status), None);
            assert_eq!(totals.percent(status), None);
        }
    }

    #[test]
    fn zero_count_category_is_zero_percent() {
        let totals = Totals::new(5, 5, 0);
        assert_eq!(totals.percent(Status::Passed), Some(50.0));
        assert_eq!(totals.percent(Status::Failed), Some(50.0));
        assert_eq!(totals.percent(Status::Warning), Some(0.0));
    }

    #[test]
    fn totals_round_trip_json() {
        let totals = Totals::new(12, 3, 4);
        let json = serde_json::to_string(&totals).unwrap();
        let back: Totals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, totals);
    }
}

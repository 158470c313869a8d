//! Derived query result structs that are not plain table rows.

use serde::Serialize;

/// Per-beach row counts across the two time-series tables, used by the CLI
/// `validate` subcommand to flag beaches without forecast coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeachCoverage {
    pub beach_id: u32,
    pub beach_name: String,
    pub marine_rows: i64,
    pub tide_rows: i64,
}

impl BeachCoverage {
    /// True when neither time-series table has a single row for the beach.
    pub fn is_uncovered(&self) -> bool {
        self.marine_rows == 0 && self.tide_rows == 0
    }
}

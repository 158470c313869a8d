//! Row types and CSV parsing for the three static forecast tables.
//!
//! The dashboard is fed by three header-row CSV files published alongside
//! the app:
//!
//! - **Beach details** -- one row of static metadata per beach
//! - **Marine observations** -- one row per beach per forecast hour
//! - **Tide extrema** -- recorded high/low tide events, sparse
//!
//! All three tables are keyed by `beach_id`. The same parsers serve the
//! WASM app (fetched text), the CLI (local files or HTTP), and the SQLite
//! loaders.

mod beach;
mod de;
mod marine;
mod tide;

pub use beach::{parse_beaches, BeachDetails};
pub use marine::{parse_marine_observations, MarineObservation};
pub use tide::{parse_tide_extrema, TideExtremum, TideKind};

/// A parsed table plus the number of malformed rows that were skipped.
///
/// Rows that fail to deserialize (missing columns, non-numeric beach id,
/// unreadable timestamp) are dropped rather than failing the whole table;
/// callers that care report the skip count.
#[derive(Debug, Clone)]
pub struct ParsedTable<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl<T> ParsedTable<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

pub(crate) fn parse_rows<T: serde::de::DeserializeOwned>(csv_data: &str) -> ParsedTable<T> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(_) => skipped += 1,
        }
    }
    ParsedTable { rows, skipped }
}

//! In-memory SQLite layer for the beach forecast tables.
//!
//! The three static CSV tables are loaded once into an in-memory SQLite
//! database and read back through typed query methods, both from the
//! Dioxus/WASM dashboard and from the native CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via
//!   `wasm32-unknown-unknown`)
//! - CSV text loaded at runtime by the consuming crate (fetched in the
//!   browser, read from disk or HTTP in the CLI)
//! - Typed query methods returning the `surf_data` row structs
//!
//! # Tables
//!
//! See [`schema::create_schema`]:
//! - `beaches` -- static per-beach metadata
//! - `marine_observations` -- one row per beach per forecast hour
//! - `tide_extrema` -- recorded high/low tide events
//!
//! Window truncation and interpolation stay out of SQL; queries return full
//! per-beach slices sorted by time and the pure transforms in
//! `surf-forecast` take it from there.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the three forecast tables.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods to
    /// populate it with CSV text.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

/// Read a stored timestamp column back into a `NaiveDateTime`.
pub(crate) fn timestamp_column(
    row: &rusqlite::Row<'_>,
    idx: usize,
) -> rusqlite::Result<NaiveDateTime> {
    let text: String = row.get(idx)?;
    surf_utils::dates::parse_timestamp(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_tides("beach_id,tide_time,tide_type,tide_height\n1,2024-05-01T03:12:00,low,0.4\n")
            .unwrap();
        // Both handles see the same underlying connection.
        assert_eq!(db2.query_tides_for_beach(1).unwrap().len(), 1);
    }
}

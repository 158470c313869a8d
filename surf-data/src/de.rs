//! Serde helpers shared by the row structs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Deserialize a timestamp column through the tolerant parser in
/// `surf_utils::dates` so the row structs accept every form the published
/// tables have used.
pub fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    surf_utils::dates::parse_timestamp(&s).map_err(serde::de::Error::custom)
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ParsedTable;

/// Whether a recorded tide extremum is a high or a low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    Low,
}

impl std::fmt::Display for TideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TideKind::High => write!(f, "high"),
            TideKind::Low => write!(f, "low"),
        }
    }
}

/// A recorded high or low tide event. The table is sparse; the hourly
/// curve shown in the tide chart is interpolated between these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideExtremum {
    pub beach_id: u32,
    #[serde(deserialize_with = "crate::de::timestamp")]
    pub tide_time: NaiveDateTime,
    pub tide_type: TideKind,
    /// Height in metres above datum.
    pub tide_height: f64,
}

/// Parse the tide extrema table.
pub fn parse_tide_extrema(csv_data: &str) -> ParsedTable<TideExtremum> {
    crate::parse_rows(csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
beach_id,tide_time,tide_type,tide_height
1,2024-05-01T03:12:00Z,low,0.4
1,2024-05-01T09:41:00Z,high,1.6
1,2024-05-01T15:55:00Z,low,0.5
2,2024-05-01T04:02:00Z,low,0.3
";

    #[test]
    fn test_parse_tide_extrema() {
        let table = parse_tide_extrema(FIXTURE);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.skipped, 0);
        assert_eq!(table.rows[0].tide_type, TideKind::Low);
        assert_eq!(table.rows[1].tide_type, TideKind::High);
        assert!((table.rows[1].tide_height - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_tide_type_skipped() {
        let csv = "beach_id,tide_time,tide_type,tide_height\n1,2024-05-01T03:12:00Z,slack,0.4\n";
        let table = parse_tide_extrema(csv);
        assert!(table.rows.is_empty());
        assert_eq!(table.skipped, 1);
    }
}

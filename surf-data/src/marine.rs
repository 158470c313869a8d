use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ParsedTable;

/// One hourly marine forecast row for a beach.
///
/// Heights are metres, periods seconds, speeds m/s, directions degrees
/// clockwise from north.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarineObservation {
    pub beach_id: u32,
    #[serde(deserialize_with = "crate::de::timestamp")]
    pub date_time: NaiveDateTime,
    pub air_temperature: f64,
    pub water_temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub gust: f64,
    pub swell_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub secondary_swell_direction: f64,
    pub secondary_swell_height: f64,
    pub secondary_swell_period: f64,
    pub wave_direction: f64,
    pub wave_height: f64,
    pub wave_period: f64,
    pub wind_wave_direction: f64,
    pub wind_wave_height: f64,
    pub wind_wave_period: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub visibility: f64,
    pub cloudcover: f64,
}

/// Parse the hourly marine observations table.
pub fn parse_marine_observations(csv_data: &str) -> ParsedTable<MarineObservation> {
    crate::parse_rows(csv_data)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HEADER: &str = "beach_id,date_time,air_temperature,water_temperature,wind_speed,wind_direction,gust,swell_direction,swell_height,swell_period,secondary_swell_direction,secondary_swell_height,secondary_swell_period,wave_direction,wave_height,wave_period,wind_wave_direction,wind_wave_height,wind_wave_period,precipitation,humidity,pressure,visibility,cloudcover";

    pub(crate) fn row(beach_id: u32, ts: &str, wave_height: f64) -> String {
        format!(
            "{beach_id},{ts},19.2,21.0,6.4,120,9.1,155,1.4,11.2,90,0.4,6.0,150,{wave_height},10.8,140,0.3,4.2,0,68,1014,10,35"
        )
    }

    #[test]
    fn test_parse_marine_observations() {
        let csv = format!(
            "{HEADER}\n{}\n{}\n",
            row(1, "2024-05-01T06:00:00Z", 1.6),
            row(1, "2024-05-01T07:00:00Z", 1.7)
        );
        let table = parse_marine_observations(&csv);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.skipped, 0);
        let first = &table.rows[0];
        assert_eq!(first.beach_id, 1);
        assert_eq!(
            first.date_time,
            surf_utils::dates::parse_timestamp("2024-05-01T06:00:00").unwrap()
        );
        assert!((first.wave_height - 1.6).abs() < 1e-9);
        assert!((first.cloudcover - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_timestamp_skipped() {
        let csv = format!(
            "{HEADER}\n{}\n{}\n",
            row(1, "soon", 1.6),
            row(2, "2024-05-01T07:00:00Z", 1.7)
        );
        let table = parse_marine_observations(&csv);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.skipped, 1);
        assert_eq!(table.rows[0].beach_id, 2);
    }
}

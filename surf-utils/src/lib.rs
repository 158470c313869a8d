//! Shared utility functions for the surf forecast crates.

/// Date and timestamp helpers
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Timestamp format used when rows are stored in SQLite: "YYYY-MM-DDTHH:MM:SS"
    pub const STORE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Format a NaiveDateTime for storage.
    pub fn format_timestamp(ts: &NaiveDateTime) -> String {
        ts.format(STORE_FORMAT).to_string()
    }

    /// Parse a timestamp from any of the forms the static CSV tables use.
    ///
    /// Accepts RFC 3339 (`2024-05-01T06:00:00Z`, with or without a zone or
    /// fractional seconds) and the plain `YYYY-MM-DD HH:MM[:SS]` form. The
    /// zone offset, if present, is discarded; the tables carry local beach
    /// time.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim().trim_end_matches('Z');
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        for fmt in FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(ts);
            }
        }
        anyhow::bail!("unrecognized timestamp: {s:?}")
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// The "YYYY-MM-DD" calendar date of a timestamp, used as the
    /// day-bucketing key everywhere.
    pub fn day_key(ts: &NaiveDateTime) -> String {
        ts.format("%Y-%m-%d").to_string()
    }

    /// Truncate a timestamp to the whole hour.
    pub fn truncate_to_hour(ts: &NaiveDateTime) -> NaiveDateTime {
        ts.date()
            .and_hms_opt(chrono::Timelike::hour(ts), 0, 0)
            .unwrap_or(*ts)
    }

    /// Epoch milliseconds for handing timestamps to the chart layer.
    pub fn epoch_millis(ts: &NaiveDateTime) -> i64 {
        ts.and_utc().timestamp_millis()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_timestamp_forms() {
            let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap();
            assert_eq!(parse_timestamp("2024-05-01T06:00:00Z").unwrap(), expected);
            assert_eq!(parse_timestamp("2024-05-01T06:00:00").unwrap(), expected);
            assert_eq!(parse_timestamp("2024-05-01 06:00:00").unwrap(), expected);
            assert_eq!(parse_timestamp("2024-05-01 06:00").unwrap(), expected);
            assert!(parse_timestamp("yesterday").is_err());
        }

        #[test]
        fn test_day_key() {
            let ts = parse_timestamp("2024-05-01T23:30:00").unwrap();
            assert_eq!(day_key(&ts), "2024-05-01");
        }

        #[test]
        fn test_truncate_to_hour() {
            let ts = parse_timestamp("2024-05-01T06:47:12").unwrap();
            assert_eq!(
                truncate_to_hour(&ts),
                parse_timestamp("2024-05-01T06:00:00").unwrap()
            );
        }

        #[test]
        fn test_store_round_trip() {
            let ts = parse_timestamp("2024-05-01T18:00:00").unwrap();
            assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
        }
    }
}

/// Unit conversions and compass helpers for display.
pub mod units {
    /// Metres to feet, as shown in the imperial readouts.
    pub fn metres_to_feet(m: f64) -> f64 {
        m * 3.281
    }

    const COMPASS_POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];

    /// Map a bearing in degrees to its 16-point compass label.
    /// 360 wraps back to "N".
    pub fn compass_direction(deg: f64) -> &'static str {
        let ix = (deg / 22.5).round() as usize % 16;
        COMPASS_POINTS[ix]
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compass_direction() {
            assert_eq!(compass_direction(0.0), "N");
            assert_eq!(compass_direction(359.0), "N");
            assert_eq!(compass_direction(180.0), "S");
            assert_eq!(compass_direction(90.0), "E");
            assert_eq!(compass_direction(22.0), "NNE");
        }

        #[test]
        fn test_metres_to_feet() {
            assert!((metres_to_feet(2.0) - 6.562).abs() < 1e-9);
        }
    }
}

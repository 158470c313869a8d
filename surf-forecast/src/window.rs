//! Day bucketing and the visible 4-day forecast window.

use chrono::NaiveDateTime;
use surf_data::{BeachDetails, MarineObservation, TideExtremum};
use surf_utils::dates;

/// Number of distinct calendar dates shown per beach.
pub const FORECAST_DAYS: usize = 4;

/// Anything carrying the timestamp its table is bucketed by.
pub trait Timestamped {
    fn timestamp(&self) -> NaiveDateTime;

    fn day_key(&self) -> String {
        dates::day_key(&self.timestamp())
    }
}

impl Timestamped for MarineObservation {
    fn timestamp(&self) -> NaiveDateTime {
        self.date_time
    }
}

impl Timestamped for TideExtremum {
    fn timestamp(&self) -> NaiveDateTime {
        self.tide_time
    }
}

/// Sorted distinct calendar dates present in a slice of rows.
pub fn unique_days<T: Timestamped>(rows: &[T]) -> Vec<String> {
    let mut days: Vec<String> = rows.iter().map(|r| r.day_key()).collect();
    days.sort();
    days.dedup();
    days
}

/// Keep only the rows falling on the earliest `max_days` distinct calendar
/// dates present in the slice, preserving order.
pub fn clip_to_first_days<T: Timestamped + Clone>(rows: &[T], max_days: usize) -> Vec<T> {
    let mut days = unique_days(rows);
    days.truncate(max_days);
    rows.iter()
        .filter(|r| days.iter().any(|d| *d == r.day_key()))
        .cloned()
        .collect()
}

/// The per-beach slice of the two time-series tables, clipped to the
/// visible window.
///
/// Built on every beach change: filter by beach id, sort by time, clip each
/// table independently to its earliest [`FORECAST_DAYS`] distinct dates.
/// Both tables empty after clipping is the distinct "no data" state, not an
/// error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastWindow {
    pub marine: Vec<MarineObservation>,
    pub tides: Vec<TideExtremum>,
    /// Sorted distinct dates of the hourly table; drives day paging.
    pub days: Vec<String>,
}

impl ForecastWindow {
    pub fn build(
        marine_all: &[MarineObservation],
        tides_all: &[TideExtremum],
        beach: &BeachDetails,
    ) -> Self {
        let mut marine: Vec<MarineObservation> = marine_all
            .iter()
            .filter(|row| row.beach_id == beach.beach_id)
            .cloned()
            .collect();
        marine.sort_by_key(|row| row.date_time);

        let mut tides: Vec<TideExtremum> = tides_all
            .iter()
            .filter(|row| row.beach_id == beach.beach_id)
            .cloned()
            .collect();
        tides.sort_by_key(|row| row.tide_time);

        let marine = clip_to_first_days(&marine, FORECAST_DAYS);
        let tides = clip_to_first_days(&tides, FORECAST_DAYS);
        let days = unique_days(&marine);

        ForecastWindow {
            marine,
            tides,
            days,
        }
    }

    /// True when the selected beach has no rows at all in the window.
    pub fn is_no_data(&self) -> bool {
        self.marine.is_empty() && self.tides.is_empty()
    }

    /// Hourly rows falling on one calendar date.
    pub fn marine_for_day(&self, day: &str) -> Vec<MarineObservation> {
        self.marine
            .iter()
            .filter(|row| row.day_key() == day)
            .cloned()
            .collect()
    }

    /// Tide extrema falling on one calendar date.
    pub fn tides_for_day(&self, day: &str) -> Vec<TideExtremum> {
        self.tides
            .iter()
            .filter(|row| row.day_key() == day)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_data::{parse_beaches, parse_marine_observations, parse_tide_extrema, TideKind};

    const MARINE_HEADER: &str = "beach_id,date_time,air_temperature,water_temperature,wind_speed,wind_direction,gust,swell_direction,swell_height,swell_period,secondary_swell_direction,secondary_swell_height,secondary_swell_period,wave_direction,wave_height,wave_period,wind_wave_direction,wind_wave_height,wind_wave_period,precipitation,humidity,pressure,visibility,cloudcover";

    fn marine_row(beach_id: u32, ts: &str) -> String {
        format!(
            "{beach_id},{ts},19.2,21.0,6.4,120,9.1,155,1.4,11.2,90,0.4,6.0,150,1.6,10.8,140,0.3,4.2,0,68,1014,10,35"
        )
    }

    fn marine_fixture(rows: &[String]) -> Vec<MarineObservation> {
        parse_marine_observations(&format!("{MARINE_HEADER}\n{}\n", rows.join("\n"))).rows
    }

    fn beach(beach_id: u32) -> BeachDetails {
        let csv = format!(
            "beach_id,beach_name,area,country,region,lat,lon,timezone,beach_text_summary,ability_level,ability_level_long_text,local_vibe,local_vibe_long_text,crowd_factor,crowd_factor_long_text,spot_rating,spot_rating_long_text,shoulder_burn,shoulder_burn_long_text,water_quality,water_quality_long_text,hazards,access,bring_your,seabed,best_season\n{beach_id},Test Beach,Area,AU,NSW,-33.7,151.3,Australia/Sydney,,,,,,,,,,,,,,,,,,\n"
        );
        parse_beaches(&csv).rows.remove(0)
    }

    #[test]
    fn test_unique_days_sorted_distinct() {
        let rows = marine_fixture(&[
            marine_row(1, "2024-05-02T06:00:00"),
            marine_row(1, "2024-05-01T06:00:00"),
            marine_row(1, "2024-05-01T07:00:00"),
        ]);
        assert_eq!(unique_days(&rows), vec!["2024-05-01", "2024-05-02"]);
    }

    #[test]
    fn test_clip_keeps_earliest_four_days() {
        let rows = marine_fixture(&[
            marine_row(1, "2024-05-01T06:00:00"),
            marine_row(1, "2024-05-02T06:00:00"),
            marine_row(1, "2024-05-03T06:00:00"),
            marine_row(1, "2024-05-04T06:00:00"),
            marine_row(1, "2024-05-05T06:00:00"),
            marine_row(1, "2024-05-06T06:00:00"),
        ]);
        let clipped = clip_to_first_days(&rows, FORECAST_DAYS);
        assert_eq!(unique_days(&clipped).len(), 4);
        assert_eq!(unique_days(&clipped).last().unwrap(), "2024-05-04");
    }

    #[test]
    fn test_build_filters_sorts_and_windows() {
        let rows = marine_fixture(&[
            marine_row(2, "2024-05-01T06:00:00"),
            marine_row(1, "2024-05-01T08:00:00"),
            marine_row(1, "2024-05-01T06:00:00"),
            marine_row(1, "2024-05-05T06:00:00"),
            marine_row(1, "2024-05-04T06:00:00"),
            marine_row(1, "2024-05-03T06:00:00"),
            marine_row(1, "2024-05-02T06:00:00"),
        ]);
        let window = ForecastWindow::build(&rows, &[], &beach(1));
        // Beach 2's row is gone, rows are time-sorted, day 5 is clipped.
        assert!(window.marine.iter().all(|r| r.beach_id == 1));
        assert!(window
            .marine
            .windows(2)
            .all(|pair| pair[0].date_time <= pair[1].date_time));
        assert_eq!(
            window.days,
            vec!["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04"]
        );
        assert_eq!(window.marine_for_day("2024-05-01").len(), 2);
        assert!(!window.is_no_data());
    }

    #[test]
    fn test_empty_window_is_no_data_not_error() {
        let rows = marine_fixture(&[marine_row(2, "2024-05-01T06:00:00")]);
        let tides = parse_tide_extrema(
            "beach_id,tide_time,tide_type,tide_height\n2,2024-05-01T03:12:00,low,0.4\n",
        )
        .rows;
        let window = ForecastWindow::build(&rows, &tides, &beach(1));
        assert!(window.is_no_data());
        assert!(window.marine.is_empty());
        assert!(window.tides.is_empty());
        assert!(window.days.is_empty());
    }

    #[test]
    fn test_tides_clip_independently_of_marine() {
        // Marine covers days 1-4; tides cover days 3-7. Each table keeps its
        // own earliest four dates.
        let rows = marine_fixture(&[
            marine_row(1, "2024-05-01T06:00:00"),
            marine_row(1, "2024-05-02T06:00:00"),
            marine_row(1, "2024-05-03T06:00:00"),
            marine_row(1, "2024-05-04T06:00:00"),
        ]);
        let tide_csv: String = (3..=7)
            .map(|d| format!("1,2024-05-{d:02}T03:00:00,low,0.4"))
            .collect::<Vec<_>>()
            .join("\n");
        let tides = parse_tide_extrema(&format!(
            "beach_id,tide_time,tide_type,tide_height\n{tide_csv}\n"
        ))
        .rows;
        let window = ForecastWindow::build(&rows, &tides, &beach(1));
        assert_eq!(window.tides.len(), 4);
        assert_eq!(window.tides.last().unwrap().tide_type, TideKind::Low);
        assert_eq!(
            surf_utils::dates::day_key(&window.tides.last().unwrap().tide_time),
            "2024-05-06"
        );
    }
}

//! Typed query methods for reading the forecast tables back out.
//!
//! Queries return the `surf_data` row structs (or the derived structs in
//! [`crate::models`]); per-beach slices come back sorted by time so the
//! pure transforms in `surf-forecast` can window them directly.

use crate::models::BeachCoverage;
use crate::{timestamp_column, Database};
use rusqlite::params;
use surf_data::{BeachDetails, MarineObservation, TideExtremum, TideKind};

fn beach_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BeachDetails> {
    Ok(BeachDetails {
        beach_id: row.get(0)?,
        beach_name: row.get(1)?,
        area: row.get(2)?,
        country: row.get(3)?,
        region: row.get(4)?,
        lat: row.get(5)?,
        lon: row.get(6)?,
        timezone: row.get(7)?,
        beach_text_summary: row.get(8)?,
        ability_level: row.get(9)?,
        ability_level_long_text: row.get(10)?,
        local_vibe: row.get(11)?,
        local_vibe_long_text: row.get(12)?,
        crowd_factor: row.get(13)?,
        crowd_factor_long_text: row.get(14)?,
        spot_rating: row.get(15)?,
        spot_rating_long_text: row.get(16)?,
        shoulder_burn: row.get(17)?,
        shoulder_burn_long_text: row.get(18)?,
        water_quality: row.get(19)?,
        water_quality_long_text: row.get(20)?,
        hazards: row.get(21)?,
        access: row.get(22)?,
        bring_your: row.get(23)?,
        seabed: row.get(24)?,
        best_season: row.get(25)?,
    })
}

fn marine_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MarineObservation> {
    Ok(MarineObservation {
        beach_id: row.get(0)?,
        date_time: timestamp_column(row, 1)?,
        air_temperature: row.get(2)?,
        water_temperature: row.get(3)?,
        wind_speed: row.get(4)?,
        wind_direction: row.get(5)?,
        gust: row.get(6)?,
        swell_direction: row.get(7)?,
        swell_height: row.get(8)?,
        swell_period: row.get(9)?,
        secondary_swell_direction: row.get(10)?,
        secondary_swell_height: row.get(11)?,
        secondary_swell_period: row.get(12)?,
        wave_direction: row.get(13)?,
        wave_height: row.get(14)?,
        wave_period: row.get(15)?,
        wind_wave_direction: row.get(16)?,
        wind_wave_height: row.get(17)?,
        wind_wave_period: row.get(18)?,
        precipitation: row.get(19)?,
        humidity: row.get(20)?,
        pressure: row.get(21)?,
        visibility: row.get(22)?,
        cloudcover: row.get(23)?,
    })
}

fn tide_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TideExtremum> {
    let kind: String = row.get(2)?;
    let tide_type = match kind.as_str() {
        "high" => TideKind::High,
        "low" => TideKind::Low,
        other => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                format!("unknown tide type {other:?}").into(),
            ))
        }
    };
    Ok(TideExtremum {
        beach_id: row.get(0)?,
        tide_time: timestamp_column(row, 1)?,
        tide_type,
        tide_height: row.get(3)?,
    })
}

const MARINE_COLUMNS: &str = "beach_id, date_time, air_temperature, water_temperature, \
     wind_speed, wind_direction, gust, \
     swell_direction, swell_height, swell_period, \
     secondary_swell_direction, secondary_swell_height, secondary_swell_period, \
     wave_direction, wave_height, wave_period, \
     wind_wave_direction, wind_wave_height, wind_wave_period, \
     precipitation, humidity, pressure, visibility, cloudcover";

impl Database {
    /// All beaches, ordered by name (for the search list and the map).
    pub fn query_beaches(&self) -> anyhow::Result<Vec<BeachDetails>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT beach_id, beach_name, area, country, region, lat, lon, timezone,
                    beach_text_summary,
                    ability_level, ability_level_long_text,
                    local_vibe, local_vibe_long_text,
                    crowd_factor, crowd_factor_long_text,
                    spot_rating, spot_rating_long_text,
                    shoulder_burn, shoulder_burn_long_text,
                    water_quality, water_quality_long_text,
                    hazards, access, bring_your, seabed, best_season
             FROM beaches
             ORDER BY beach_name",
        )?;
        let rows = stmt
            .query_map([], beach_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[Surf Debug] query: query_beaches returned {} rows", rows.len());
        Ok(rows)
    }

    /// Hourly forecast rows for one beach, sorted by time.
    pub fn query_marine_for_beach(&self, beach_id: u32) -> anyhow::Result<Vec<MarineObservation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {MARINE_COLUMNS} FROM marine_observations
             WHERE beach_id = ?1
             ORDER BY date_time"
        ))?;
        let rows = stmt
            .query_map(params![beach_id], marine_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Surf Debug] query: query_marine_for_beach({beach_id}) returned {} rows",
            rows.len()
        );
        Ok(rows)
    }

    /// Tide extrema for one beach, sorted by time.
    pub fn query_tides_for_beach(&self, beach_id: u32) -> anyhow::Result<Vec<TideExtremum>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT beach_id, tide_time, tide_type, tide_height FROM tide_extrema
             WHERE beach_id = ?1
             ORDER BY tide_time",
        )?;
        let rows = stmt
            .query_map(params![beach_id], tide_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Surf Debug] query: query_tides_for_beach({beach_id}) returned {} rows",
            rows.len()
        );
        Ok(rows)
    }

    /// The newest hourly row for one beach (map popup summary), if any.
    pub fn query_latest_observation(
        &self,
        beach_id: u32,
    ) -> anyhow::Result<Option<MarineObservation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {MARINE_COLUMNS} FROM marine_observations
             WHERE beach_id = ?1
             ORDER BY date_time DESC
             LIMIT 1"
        ))?;
        let mut rows = stmt.query_map(params![beach_id], marine_from_row)?;
        Ok(rows.next().transpose()?)
    }

    /// Row counts per beach across both time-series tables.
    pub fn query_coverage(&self) -> anyhow::Result<Vec<BeachCoverage>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT b.beach_id, b.beach_name,
                    (SELECT COUNT(*) FROM marine_observations m WHERE m.beach_id = b.beach_id),
                    (SELECT COUNT(*) FROM tide_extrema t WHERE t.beach_id = b.beach_id)
             FROM beaches b
             ORDER BY b.beach_name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BeachCoverage {
                    beach_id: row.get(0)?,
                    beach_name: row.get(1)?,
                    marine_rows: row.get(2)?,
                    tide_rows: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEACHES_CSV: &str = "\
beach_id,beach_name,area,country,region,lat,lon,timezone,beach_text_summary,ability_level,ability_level_long_text,local_vibe,local_vibe_long_text,crowd_factor,crowd_factor_long_text,spot_rating,spot_rating_long_text,shoulder_burn,shoulder_burn_long_text,water_quality,water_quality_long_text,hazards,access,bring_your,seabed,best_season
2,Freshwater,Northern Beaches,Australia,NSW,-33.78293,151.29504,Australia/Sydney,Sheltered corner,Beginner,Gentle reform waves,Mellow,Longboard friendly,High,Summer crowds,3/5,Soft peaks,Low,Short paddle,Good,Clean,Shorebreak,Car park,Spring suit,Sand,Summer
1,Curl Curl,Northern Beaches,Australia,NSW,-33.76886,151.28888,Australia/Sydney,Punchy beach break,Intermediate,Best for confident surfers,Relaxed,Friendly crowd,Medium,Busy weekends,4/5,Consistent banks,Moderate,Steady paddle,Good,Clean,Rips,Street parking,3/2 wetsuit,Sand,Autumn
";

    const MARINE_HEADER: &str = "beach_id,date_time,air_temperature,water_temperature,wind_speed,wind_direction,gust,swell_direction,swell_height,swell_period,secondary_swell_direction,secondary_swell_height,secondary_swell_period,wave_direction,wave_height,wave_period,wind_wave_direction,wind_wave_height,wind_wave_period,precipitation,humidity,pressure,visibility,cloudcover";

    fn marine_row(beach_id: u32, ts: &str, wave_height: f64) -> String {
        format!(
            "{beach_id},{ts},19.2,21.0,6.4,120,9.1,155,1.4,11.2,90,0.4,6.0,150,{wave_height},10.8,140,0.3,4.2,0,68,1014,10,35"
        )
    }

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_beaches(BEACHES_CSV).unwrap();
        let marine = format!(
            "{MARINE_HEADER}\n{}\n{}\n{}\n",
            marine_row(1, "2024-05-01T07:00:00", 1.7),
            marine_row(1, "2024-05-01T06:00:00", 1.6),
            marine_row(2, "2024-05-01T06:00:00", 0.9),
        );
        db.load_marine_observations(&marine).unwrap();
        db.load_tides(
            "beach_id,tide_time,tide_type,tide_height\n\
             1,2024-05-01T09:41:00,high,1.6\n\
             1,2024-05-01T03:12:00,low,0.4\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn test_query_beaches_ordered_by_name() {
        let beaches = loaded_db().query_beaches().unwrap();
        assert_eq!(beaches.len(), 2);
        assert_eq!(beaches[0].beach_name, "Curl Curl");
        assert_eq!(beaches[1].beach_name, "Freshwater");
        assert!((beaches[0].lat - -33.76886).abs() < 1e-9);
    }

    #[test]
    fn test_query_marine_sorted_by_time() {
        let rows = loaded_db().query_marine_for_beach(1).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].date_time < rows[1].date_time);
        assert!((rows[0].wave_height - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_query_tides_round_trip() {
        let rows = loaded_db().query_tides_for_beach(1).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tide_type, TideKind::Low);
        assert_eq!(rows[1].tide_type, TideKind::High);
    }

    #[test]
    fn test_query_latest_observation() {
        let db = loaded_db();
        let latest = db.query_latest_observation(1).unwrap().unwrap();
        assert!((latest.wave_height - 1.7).abs() < 1e-9);
        assert!(db.query_latest_observation(42).unwrap().is_none());
    }

    #[test]
    fn test_query_coverage_flags_empty_beaches() {
        let db = loaded_db();
        db.load_beaches(
            "beach_id,beach_name,area,country,region,lat,lon,timezone,beach_text_summary,ability_level,ability_level_long_text,local_vibe,local_vibe_long_text,crowd_factor,crowd_factor_long_text,spot_rating,spot_rating_long_text,shoulder_burn,shoulder_burn_long_text,water_quality,water_quality_long_text,hazards,access,bring_your,seabed,best_season\n\
             3,Avalon,Northern Beaches,Australia,NSW,-33.6,151.3,Australia/Sydney,,,,,,,,,,,,,,,,,,\n",
        )
        .unwrap();
        let coverage = db.query_coverage().unwrap();
        assert_eq!(coverage.len(), 3);
        let avalon = coverage.iter().find(|c| c.beach_id == 3).unwrap();
        assert!(avalon.is_uncovered());
        let curl = coverage.iter().find(|c| c.beach_id == 1).unwrap();
        assert!(!curl.is_uncovered());
        assert_eq!(curl.marine_rows, 2);
        assert_eq!(curl.tide_rows, 2);
    }
}

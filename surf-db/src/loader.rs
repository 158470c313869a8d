//! CSV loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses one of the static tables through the typed parsers in
//! `surf_data` and inserts the surviving rows. Malformed rows were already
//! dropped by the parser; the skip count is logged alongside the insert
//! count.

use crate::Database;
use rusqlite::params;
use surf_data::{parse_beaches, parse_marine_observations, parse_tide_extrema};
use surf_utils::dates::format_timestamp;

impl Database {
    /// Load the beach details table from CSV text.
    pub fn load_beaches(&self, csv_data: &str) -> anyhow::Result<()> {
        let table = parse_beaches(csv_data);
        let conn = self.conn.borrow();
        for b in &table.rows {
            conn.execute(
                "INSERT OR REPLACE INTO beaches (
                    beach_id, beach_name, area, country, region, lat, lon, timezone,
                    beach_text_summary,
                    ability_level, ability_level_long_text,
                    local_vibe, local_vibe_long_text,
                    crowd_factor, crowd_factor_long_text,
                    spot_rating, spot_rating_long_text,
                    shoulder_burn, shoulder_burn_long_text,
                    water_quality, water_quality_long_text,
                    hazards, access, bring_your, seabed, best_season
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                           ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)",
                params![
                    b.beach_id,
                    b.beach_name,
                    b.area,
                    b.country,
                    b.region,
                    b.lat,
                    b.lon,
                    b.timezone,
                    b.beach_text_summary,
                    b.ability_level,
                    b.ability_level_long_text,
                    b.local_vibe,
                    b.local_vibe_long_text,
                    b.crowd_factor,
                    b.crowd_factor_long_text,
                    b.spot_rating,
                    b.spot_rating_long_text,
                    b.shoulder_burn,
                    b.shoulder_burn_long_text,
                    b.water_quality,
                    b.water_quality_long_text,
                    b.hazards,
                    b.access,
                    b.bring_your,
                    b.seabed,
                    b.best_season,
                ],
            )?;
        }
        log::info!(
            "[Surf Debug] loader: Loaded {} beaches ({} rows skipped)",
            table.rows.len(),
            table.skipped
        );
        Ok(())
    }

    /// Load the hourly marine observations table from CSV text.
    pub fn load_marine_observations(&self, csv_data: &str) -> anyhow::Result<()> {
        let table = parse_marine_observations(csv_data);
        let conn = self.conn.borrow();
        for o in &table.rows {
            conn.execute(
                "INSERT OR REPLACE INTO marine_observations (
                    beach_id, date_time,
                    air_temperature, water_temperature,
                    wind_speed, wind_direction, gust,
                    swell_direction, swell_height, swell_period,
                    secondary_swell_direction, secondary_swell_height, secondary_swell_period,
                    wave_direction, wave_height, wave_period,
                    wind_wave_direction, wind_wave_height, wind_wave_period,
                    precipitation, humidity, pressure, visibility, cloudcover
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                           ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24)",
                params![
                    o.beach_id,
                    format_timestamp(&o.date_time),
                    o.air_temperature,
                    o.water_temperature,
                    o.wind_speed,
                    o.wind_direction,
                    o.gust,
                    o.swell_direction,
                    o.swell_height,
                    o.swell_period,
                    o.secondary_swell_direction,
                    o.secondary_swell_height,
                    o.secondary_swell_period,
                    o.wave_direction,
                    o.wave_height,
                    o.wave_period,
                    o.wind_wave_direction,
                    o.wind_wave_height,
                    o.wind_wave_period,
                    o.precipitation,
                    o.humidity,
                    o.pressure,
                    o.visibility,
                    o.cloudcover,
                ],
            )?;
        }
        log::info!(
            "[Surf Debug] loader: Loaded {} marine observations ({} rows skipped)",
            table.rows.len(),
            table.skipped
        );
        Ok(())
    }

    /// Load the tide extrema table from CSV text.
    pub fn load_tides(&self, csv_data: &str) -> anyhow::Result<()> {
        let table = parse_tide_extrema(csv_data);
        let conn = self.conn.borrow();
        for t in &table.rows {
            conn.execute(
                "INSERT OR REPLACE INTO tide_extrema (beach_id, tide_time, tide_type, tide_height)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    t.beach_id,
                    format_timestamp(&t.tide_time),
                    t.tide_type.to_string(),
                    t.tide_height,
                ],
            )?;
        }
        log::info!(
            "[Surf Debug] loader: Loaded {} tide extrema ({} rows skipped)",
            table.rows.len(),
            table.skipped
        );
        Ok(())
    }
}

//! SQL schema for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is
//! initialized.

/// Returns the full SQL schema as a single batch string.
///
/// Tables:
/// - `beaches` -- static metadata, one row per beach
/// - `marine_observations` -- hourly forecast rows keyed by (beach, hour)
/// - `tide_extrema` -- recorded high/low tide events keyed by (beach, time)
///
/// Timestamps are stored as `YYYY-MM-DDTHH:MM:SS` text so chronological
/// `ORDER BY` works lexically.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS beaches (
        beach_id INTEGER PRIMARY KEY,
        beach_name TEXT NOT NULL,
        area TEXT NOT NULL,
        country TEXT NOT NULL,
        region TEXT NOT NULL,
        lat REAL NOT NULL,
        lon REAL NOT NULL,
        timezone TEXT NOT NULL,
        beach_text_summary TEXT NOT NULL,
        ability_level TEXT NOT NULL,
        ability_level_long_text TEXT NOT NULL,
        local_vibe TEXT NOT NULL,
        local_vibe_long_text TEXT NOT NULL,
        crowd_factor TEXT NOT NULL,
        crowd_factor_long_text TEXT NOT NULL,
        spot_rating TEXT NOT NULL,
        spot_rating_long_text TEXT NOT NULL,
        shoulder_burn TEXT NOT NULL,
        shoulder_burn_long_text TEXT NOT NULL,
        water_quality TEXT NOT NULL,
        water_quality_long_text TEXT NOT NULL,
        hazards TEXT NOT NULL,
        access TEXT NOT NULL,
        bring_your TEXT NOT NULL,
        seabed TEXT NOT NULL,
        best_season TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS marine_observations (
        beach_id INTEGER NOT NULL,
        date_time TEXT NOT NULL,
        air_temperature REAL NOT NULL,
        water_temperature REAL NOT NULL,
        wind_speed REAL NOT NULL,
        wind_direction REAL NOT NULL,
        gust REAL NOT NULL,
        swell_direction REAL NOT NULL,
        swell_height REAL NOT NULL,
        swell_period REAL NOT NULL,
        secondary_swell_direction REAL NOT NULL,
        secondary_swell_height REAL NOT NULL,
        secondary_swell_period REAL NOT NULL,
        wave_direction REAL NOT NULL,
        wave_height REAL NOT NULL,
        wave_period REAL NOT NULL,
        wind_wave_direction REAL NOT NULL,
        wind_wave_height REAL NOT NULL,
        wind_wave_period REAL NOT NULL,
        precipitation REAL NOT NULL,
        humidity REAL NOT NULL,
        pressure REAL NOT NULL,
        visibility REAL NOT NULL,
        cloudcover REAL NOT NULL,
        PRIMARY KEY (beach_id, date_time)
    );
    CREATE INDEX IF NOT EXISTS idx_marine_beach ON marine_observations(beach_id);
    CREATE INDEX IF NOT EXISTS idx_marine_time ON marine_observations(date_time);

    CREATE TABLE IF NOT EXISTS tide_extrema (
        beach_id INTEGER NOT NULL,
        tide_time TEXT NOT NULL,
        tide_type TEXT NOT NULL,
        tide_height REAL NOT NULL,
        PRIMARY KEY (beach_id, tide_time)
    );
    CREATE INDEX IF NOT EXISTS idx_tide_beach ON tide_extrema(beach_id);

    "#
}

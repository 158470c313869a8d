use serde::{Deserialize, Serialize};

use crate::ParsedTable;

/// Static metadata for one surf beach.
///
/// Immutable reference data loaded once; `beach_id` keys every time-series
/// table. The descriptive fields come in pairs of a short label and a long
/// text shown in the expandable top-bar section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeachDetails {
    pub beach_id: u32,
    pub beach_name: String,
    pub area: String,
    pub country: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub beach_text_summary: String,
    pub ability_level: String,
    pub ability_level_long_text: String,
    pub local_vibe: String,
    pub local_vibe_long_text: String,
    pub crowd_factor: String,
    pub crowd_factor_long_text: String,
    pub spot_rating: String,
    pub spot_rating_long_text: String,
    pub shoulder_burn: String,
    pub shoulder_burn_long_text: String,
    pub water_quality: String,
    pub water_quality_long_text: String,
    pub hazards: String,
    pub access: String,
    pub bring_your: String,
    pub seabed: String,
    pub best_season: String,
}

impl BeachDetails {
    /// Case-insensitive exact name match, used by URL-parameter selection.
    pub fn name_matches(&self, name: &str) -> bool {
        self.beach_name.eq_ignore_ascii_case(name)
    }
}

/// Parse the beach details table. Rows with a non-numeric beach id are
/// skipped, matching the published table which carries the odd junk row.
pub fn parse_beaches(csv_data: &str) -> ParsedTable<BeachDetails> {
    crate::parse_rows(csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
beach_id,beach_name,area,country,region,lat,lon,timezone,beach_text_summary,ability_level,ability_level_long_text,local_vibe,local_vibe_long_text,crowd_factor,crowd_factor_long_text,spot_rating,spot_rating_long_text,shoulder_burn,shoulder_burn_long_text,water_quality,water_quality_long_text,hazards,access,bring_your,seabed,best_season
1,Curl Curl,Northern Beaches,Australia,NSW,-33.76886,151.28888,Australia/Sydney,Punchy beach break,Intermediate,Best for confident surfers,Relaxed,Friendly local crowd,Medium,Busy on weekends,4/5,Consistent banks,Moderate,Steady paddle,Good,Clean most days,Rips near the point,Street parking,3/2 wetsuit,Sand,Autumn
not-a-number,Ghost Beach,,,,0,0,,,,,,,,,,,,,,,,,,,
2,Freshwater,Northern Beaches,Australia,NSW,-33.78293,151.29504,Australia/Sydney,Sheltered corner,Beginner,Gentle reform waves,Mellow,Longboard friendly,High,Summer crowds,3/5,Soft peaks,Low,Short paddle,Good,Clean,Shorebreak at high tide,Car park,Spring suit,Sand,Summer
";

    #[test]
    fn test_parse_beaches_skips_bad_ids() {
        let table = parse_beaches(FIXTURE);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.skipped, 1);
        assert_eq!(table.rows[0].beach_id, 1);
        assert_eq!(table.rows[0].beach_name, "Curl Curl");
        assert_eq!(table.rows[1].beach_id, 2);
        assert!((table.rows[0].lat - -33.76886).abs() < 1e-9);
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let table = parse_beaches(FIXTURE);
        assert!(table.rows[0].name_matches("curl curl"));
        assert!(table.rows[0].name_matches("CURL CURL"));
        assert!(!table.rows[0].name_matches("curl"));
    }
}

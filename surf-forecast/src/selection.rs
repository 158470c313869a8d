//! URL-parameter beach selection.

use surf_data::BeachDetails;

/// Split a location query string (with or without the leading `?`) into
/// decoded key/value pairs. `+` and percent escapes decode to their byte
/// values; malformed escapes pass through untouched.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => (percent_decode(key), percent_decode(value)),
            None => (percent_decode(part), String::new()),
        })
        .collect()
}

fn percent_decode(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hi = (bytes[i + 1] as char).to_digit(16).unwrap_or(0) as u8;
                let lo = (bytes[i + 2] as char).to_digit(16).unwrap_or(0) as u8;
                out.push(hi * 16 + lo);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Resolve the initially selected beach from URL parameters.
///
/// Fixed precedence on parameter *presence*: `beach` (case-insensitive
/// exact name match), then `beachName` (same matching), then `beachId`
/// (numeric id that must exist). A present-but-unmatched parameter does
/// not fall through to the next one.
pub fn resolve_beach_selection(
    params: &[(String, String)],
    beaches: &[BeachDetails],
) -> Option<u32> {
    let lookup = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if let Some(name) = lookup("beach") {
        return beaches
            .iter()
            .find(|b| b.name_matches(name))
            .map(|b| b.beach_id);
    }
    if let Some(name) = lookup("beachName") {
        return beaches
            .iter()
            .find(|b| b.name_matches(name))
            .map(|b| b.beach_id);
    }
    if let Some(id) = lookup("beachId") {
        if let Ok(id) = id.parse::<u32>() {
            if beaches.iter().any(|b| b.beach_id == id) {
                return Some(id);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_data::parse_beaches;

    fn beaches() -> Vec<BeachDetails> {
        let csv = "\
beach_id,beach_name,area,country,region,lat,lon,timezone,beach_text_summary,ability_level,ability_level_long_text,local_vibe,local_vibe_long_text,crowd_factor,crowd_factor_long_text,spot_rating,spot_rating_long_text,shoulder_burn,shoulder_burn_long_text,water_quality,water_quality_long_text,hazards,access,bring_your,seabed,best_season
1,Curl Curl,Northern Beaches,Australia,NSW,-33.7,151.3,Australia/Sydney,,,,,,,,,,,,,,,,,,
2,Freshwater,Northern Beaches,Australia,NSW,-33.8,151.3,Australia/Sydney,,,,,,,,,,,,,,,,,,
";
        parse_beaches(csv).rows
    }

    #[test]
    fn test_parse_query_decoding() {
        let pairs = parse_query("?beach=Curl%20Curl&zoom=13");
        assert_eq!(pairs[0], ("beach".to_string(), "Curl Curl".to_string()));
        assert_eq!(pairs[1], ("zoom".to_string(), "13".to_string()));
        let pairs = parse_query("beach=Curl+Curl");
        assert_eq!(pairs[0].1, "Curl Curl");
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_beach_name_case_insensitive() {
        let pairs = parse_query("?beach=curl%20curl");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), Some(1));
    }

    #[test]
    fn test_beach_name_param_fallback_order() {
        let pairs = parse_query("?beachName=freshwater");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), Some(2));

        // `beach` takes precedence by presence: an unmatched `beach` does not
        // fall through to `beachName`.
        let pairs = parse_query("?beach=nowhere&beachName=freshwater");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), None);
    }

    #[test]
    fn test_beach_id_param() {
        let pairs = parse_query("?beachId=2");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), Some(2));
        let pairs = parse_query("?beachId=99");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), None);
        let pairs = parse_query("?beachId=two");
        assert_eq!(resolve_beach_selection(&pairs, &beaches()), None);
    }

    #[test]
    fn test_no_params() {
        assert_eq!(resolve_beach_selection(&[], &beaches()), None);
    }
}

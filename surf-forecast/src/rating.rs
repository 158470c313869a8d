//! Four-level surf quality heuristic.

use std::fmt;

/// Ordinal surf quality label derived from one hourly row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Epic,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::Fair => "Fair",
            Rating::Good => "Good",
            Rating::Epic => "Epic",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate one hourly row from wave height (m), wind speed (m/s) and the two
/// bearings (degrees).
///
/// Tiny waves and heavy waves override everything else. In between, wave
/// height is discounted by a wind-speed factor (thresholds 10 and 15) and a
/// wind/wave alignment factor (absolute angular difference, thresholds 45
/// and 90 degrees; the difference is deliberately not wrap-aware) and the
/// adjusted height is banded.
pub fn calculate_rating(
    wave_height: f64,
    wind_speed: f64,
    wind_direction: f64,
    wave_direction: f64,
) -> Rating {
    if wave_height < 0.5 {
        return Rating::Poor;
    }
    if wave_height > 3.0 {
        return Rating::Epic;
    }

    let wind_factor = if wind_speed < 10.0 {
        1.0
    } else if wind_speed < 15.0 {
        0.8
    } else {
        0.5
    };

    let direction_diff = (wave_direction - wind_direction).abs();
    let direction_factor = if direction_diff < 45.0 {
        1.0
    } else if direction_diff < 90.0 {
        0.8
    } else {
        0.6
    };

    let adjusted_height = wave_height * wind_factor * direction_factor;

    if adjusted_height < 1.0 {
        Rating::Poor
    } else if adjusted_height < 1.5 {
        Rating::Fair
    } else if adjusted_height < 2.5 {
        Rating::Good
    } else {
        Rating::Epic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        assert_eq!(calculate_rating(0.3, 0.0, 0.0, 0.0), Rating::Poor);
        assert_eq!(calculate_rating(0.3, 50.0, 10.0, 300.0), Rating::Poor);
        assert_eq!(calculate_rating(4.0, 50.0, 10.0, 300.0), Rating::Epic);
    }

    #[test]
    fn test_clean_conditions_band() {
        // Adjusted height 2 * 1.0 * 1.0 = 2.0 -> Good
        assert_eq!(calculate_rating(2.0, 5.0, 0.0, 0.0), Rating::Good);
    }

    #[test]
    fn test_wind_penalty() {
        // 2 * 0.8 = 1.6 -> Good; 2 * 0.5 = 1.0 -> Fair
        assert_eq!(calculate_rating(2.0, 12.0, 0.0, 0.0), Rating::Good);
        assert_eq!(calculate_rating(2.0, 20.0, 0.0, 0.0), Rating::Fair);
    }

    #[test]
    fn test_direction_penalty() {
        // 1.4 * 1.0 * 0.6 = 0.84 -> Poor; aligned 1.4 -> Fair
        assert_eq!(calculate_rating(1.4, 5.0, 0.0, 120.0), Rating::Poor);
        assert_eq!(calculate_rating(1.4, 5.0, 0.0, 10.0), Rating::Fair);
    }

    #[test]
    fn test_difference_is_not_wrap_aware() {
        // 350 vs 10 degrees is 20 apart on the circle but 340 here.
        assert_eq!(calculate_rating(2.0, 5.0, 350.0, 10.0), Rating::Fair);
    }

    #[test]
    fn test_ordering() {
        assert!(Rating::Poor < Rating::Fair);
        assert!(Rating::Good < Rating::Epic);
    }
}

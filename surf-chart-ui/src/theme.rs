//! Colour palette shared by RSX components and the chart JS.

use surf_forecast::Rating;

/// Semantic colours for the dashboard. One static instance; the charts
/// receive the relevant entries through their config JSON.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // Base palette
    pub ocean_blue: &'static str,
    pub sunset_orange: &'static str,
    pub deep_ocean: &'static str,
    pub sky_blue: &'static str,

    // Semantic chart colours
    pub chart_background: &'static str,
    pub chart_area: &'static str,
    pub chart_line: &'static str,
    pub chart_text: &'static str,
    pub chart_grid: &'static str,
    pub chart_shadow: &'static str,
    pub chart_hover: &'static str,
    pub chart_highlight: &'static str,
}

pub const DEFAULT_THEME: Theme = Theme {
    ocean_blue: "#219fbd",
    sunset_orange: "#fb8501",
    deep_ocean: "#0f253f",
    sky_blue: "#8ecbe6",

    chart_background: "#fff",
    chart_area: "#8ecbe6",
    chart_line: "#0f253f",
    chart_text: "#0f253f",
    chart_grid: "rgba(15, 37, 63, 0.2)",
    chart_shadow: "rgba(15, 37, 63, 0.1)",
    chart_hover: "#219fbd",
    chart_highlight: "#fb8501",
};

/// Display colour for a rating band in the swell chart's rating strip.
pub fn rating_color(rating: Rating) -> &'static str {
    match rating {
        Rating::Poor => "#ff6b6b",
        Rating::Fair => "#ffd93d",
        Rating::Good => "#6bff6b",
        Rating::Epic => "#6b6bff",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_colors_distinct() {
        let colors = [
            rating_color(Rating::Poor),
            rating_color(Rating::Fair),
            rating_color(Rating::Good),
            rating_color(Rating::Epic),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

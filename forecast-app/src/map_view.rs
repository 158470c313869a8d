//! Full-screen map landing view.
//!
//! Shown when no beach is selected. Marker popups navigate by writing the
//! `beach` query parameter, so map selections produce shareable URLs and
//! go through the same resolution path as a pasted link.

use dioxus::prelude::*;
use serde_json::json;
use surf_chart_ui::js_bridge;
use surf_chart_ui::state::AppState;

const BEACH_MAP_ID: &str = "beach-map";

/// Fallback map centre (Curl Curl) when geolocation is unavailable.
const DEFAULT_CENTER: (f64, f64) = (-33.76886, 151.28888);
const DEFAULT_ZOOM: u32 = 13;

#[component]
pub fn MapView() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let beaches = state.beaches.read();
        let markers: Vec<serde_json::Value> = beaches
            .iter()
            .map(|b| {
                json!({
                    "beachId": b.beach_id,
                    "beachName": b.beach_name,
                    "area": b.area,
                    "region": b.region,
                    "country": b.country,
                    "lat": b.lat,
                    "lon": b.lon,
                })
            })
            .collect();
        let config = json!({
            "center": [DEFAULT_CENTER.0, DEFAULT_CENTER.1],
            "zoom": DEFAULT_ZOOM,
        });
        js_bridge::render_beach_map(
            BEACH_MAP_ID,
            &serde_json::to_string(&markers).unwrap_or_default(),
            &config.to_string(),
        );
    });

    rsx! {
        div {
            id: BEACH_MAP_ID,
            style: "width: 100%; height: calc(100vh - 61px);",
        }
    }
}

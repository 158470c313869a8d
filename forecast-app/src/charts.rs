//! The three chart sections: swell, tide and wind.
//!
//! Each section renders its chart through the D3 bridge and mounts a
//! transparent overlay that captures pointer movement. The overlay inverts
//! the section's own time scale, resolves the nearest data point with the
//! shared rule, and publishes the hovered timestamp; a single effect
//! mirrors that timestamp back into every registered chart.

use chrono::{DateTime, NaiveDateTime};
use dioxus::prelude::*;
use serde_json::json;
use surf_chart_ui::components::{ChartContainer, ChartHeader};
use surf_chart_ui::js_bridge;
use surf_chart_ui::state::AppState;
use surf_chart_ui::theme::{rating_color, DEFAULT_THEME};
use surf_data::MarineObservation;
use surf_forecast::{calculate_rating, daily_marks, interpolate_hourly, nearest_index, TidePoint};
use surf_utils::{dates, units};

const CHART_HEIGHT: u32 = 200;

const SWELL_CHART_ID: &str = "swell-chart";
const TIDE_CHART_ID: &str = "tide-chart";
const WIND_CHART_ID: &str = "wind-chart";
const MINI_MAP_ID: &str = "wind-mini-map";

#[derive(Clone, Copy, PartialEq)]
struct Margins {
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
}

const SWELL_MARGIN: Margins = Margins { top: 20, right: 10, bottom: 50, left: 10 };
const TIDE_MARGIN: Margins = Margins { top: 20, right: 35, bottom: 70, left: 12 };
const WIND_MARGIN: Margins = Margins { top: 20, right: 35, bottom: 70, left: 12 };

/// Chart width derived from the viewport: full width on mobile, 80% on
/// desktop, clamped to something drawable.
fn chart_width(viewport: f64, is_mobile: bool) -> u32 {
    let width = if is_mobile { viewport } else { viewport * 0.8 };
    width.clamp(320.0, 1400.0) as u32
}

/// The calendar dates the charts should decorate: the active day on
/// mobile, the whole window on desktop.
fn display_days(state: &AppState) -> Vec<String> {
    if (state.is_mobile)() {
        state
            .day_window
            .read()
            .current_day()
            .map(|d| vec![d.to_string()])
            .unwrap_or_default()
    } else {
        state.window.read().days.clone()
    }
}

fn chart_config(
    width: u32,
    margin: Margins,
    domain: (i64, i64),
    is_mobile: bool,
    days: &[String],
) -> String {
    json!({
        "width": width,
        "height": CHART_HEIGHT,
        "margin": {
            "top": margin.top,
            "right": margin.right,
            "bottom": margin.bottom,
            "left": margin.left,
        },
        "domain": [domain.0, domain.1],
        "isMobile": is_mobile,
        "days": days,
        "colors": {
            "background": DEFAULT_THEME.chart_background,
            "area": DEFAULT_THEME.chart_area,
            "line": DEFAULT_THEME.chart_line,
            "text": DEFAULT_THEME.chart_text,
            "grid": DEFAULT_THEME.chart_grid,
            "shadow": DEFAULT_THEME.chart_shadow,
            "hover": DEFAULT_THEME.chart_hover,
            "highlight": DEFAULT_THEME.chart_highlight,
        },
    })
    .to_string()
}

fn naive_from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

fn time_domain(times: &[NaiveDateTime]) -> (i64, i64) {
    match (times.first(), times.last()) {
        (Some(first), Some(last)) => (dates::epoch_millis(first), dates::epoch_millis(last)),
        _ => (0, 0),
    }
}

/// Transparent pointer-capture layer over one chart's plotting area.
///
/// Pixel position maps linearly onto the chart's time domain (the overlay
/// is sized to the plotting area exactly), then the shared nearest-point
/// rule picks the row to publish.
#[derive(Props, Clone, PartialEq)]
struct HoverOverlayProps {
    margin: Margins,
    inner_width: u32,
    inner_height: u32,
    domain: (i64, i64),
    times: Vec<NaiveDateTime>,
}

#[component]
fn HoverOverlay(props: HoverOverlayProps) -> Element {
    let mut state = use_context::<AppState>();
    let times = props.times.clone();
    let (d0, d1) = props.domain;
    let inner_width = props.inner_width as f64;

    rsx! {
        div {
            style: "position: absolute; top: {props.margin.top}px; left: {props.margin.left}px; width: {props.inner_width}px; height: {props.inner_height}px; z-index: 5;",
            onmousemove: move |evt| {
                if times.is_empty() || d1 <= d0 {
                    return;
                }
                let x = evt.element_coordinates().x;
                let frac = (x / inner_width).clamp(0.0, 1.0);
                let probe_ms = d0 + (frac * (d1 - d0) as f64).round() as i64;
                let Some(probe) = naive_from_millis(probe_ms) else {
                    return;
                };
                if let Some(i) = nearest_index(&times, probe) {
                    let hit = times[i];
                    if *state.hovered_time.peek() != Some(hit) {
                        state.hovered_time.set(Some(hit));
                    }
                }
            },
            onmouseleave: move |_| state.hovered_time.set(None),
        }
    }
}

/// Wrapper for the three sections plus the single hover-mirror effect.
#[component]
pub fn ForecastCharts() -> Element {
    let state = use_context::<AppState>();

    // Mirror the hovered timestamp into every registered chart; each chart
    // maps it through its own scale.
    use_effect(move || match (state.hovered_time)() {
        Some(t) => js_bridge::set_hover(dates::epoch_millis(&t)),
        None => js_bridge::clear_hover(),
    });

    rsx! {
        SwellSection {}
        TideSection {}
        WindSection {}
    }
}

fn hovered_row(state: &AppState, data: &[MarineObservation]) -> Option<MarineObservation> {
    let t = (state.hovered_time)()?;
    data.iter().find(|d| d.date_time == t).cloned()
}

/// Compass label plus rotated arrow for a bearing.
#[component]
fn DirectionArrow(direction: f64) -> Element {
    let compass = units::compass_direction(direction);
    let degrees = direction.round() as i32;
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 4px;",
            svg {
                width: "16",
                height: "16",
                view_box: "0 0 16 16",
                style: "transform: rotate({direction}deg);",
                polygon { points: "8,2 14,14 8,11 2,14", fill: "#333" }
            }
            "{compass} {degrees}°"
        }
    }
}

#[component]
fn ReadoutValue(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-width: 72px;",
            span {
                style: "font-size: 11px; color: #999;",
                "{label}"
            }
            span {
                style: "font-weight: 700;",
                "{value}"
            }
        }
    }
}

// ───────────────────────────── Swell ─────────────────────────────

#[component]
pub fn SwellSection() -> Element {
    let state = use_context::<AppState>();

    // Render/refresh the chart whenever data, paging, viewport or the
    // mobile flag change.
    use_effect(move || {
        let data = state.display_marine();
        let is_mobile = (state.is_mobile)();
        let width = chart_width((state.viewport_width)(), is_mobile);
        let days = display_days(&state);

        if data.is_empty() {
            js_bridge::destroy_chart(SWELL_CHART_ID);
            return;
        }

        let times: Vec<NaiveDateTime> = data.iter().map(|d| d.date_time).collect();
        let domain = time_domain(&times);
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|d| {
                json!({
                    "t": dates::epoch_millis(&d.date_time),
                    "waveHeight": d.wave_height,
                    "ratingColor": rating_color(calculate_rating(
                        d.wave_height,
                        d.wind_speed,
                        d.wind_direction,
                        d.wave_direction,
                    )),
                })
            })
            .collect();
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        js_bridge::render_swell_chart(
            SWELL_CHART_ID,
            &data_json,
            &chart_config(width, SWELL_MARGIN, domain, is_mobile, &days),
        );
    });

    let data = state.display_marine();
    let is_mobile = (state.is_mobile)();
    let width = chart_width((state.viewport_width)(), is_mobile);
    let times: Vec<NaiveDateTime> = data.iter().map(|d| d.date_time).collect();
    let domain = time_domain(&times);
    let row = hovered_row(&state, &data);

    if data.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            ChartHeader {
                title: "Swell".to_string(),
                unit_description: "Wave height in feet; coloured strip shows the surf rating".to_string(),
            }
            SwellReadout { row }
            ChartContainer {
                id: SWELL_CHART_ID.to_string(),
                min_height: CHART_HEIGHT,
                HoverOverlay {
                    margin: SWELL_MARGIN,
                    inner_width: width - SWELL_MARGIN.left - SWELL_MARGIN.right,
                    inner_height: CHART_HEIGHT - SWELL_MARGIN.top - SWELL_MARGIN.bottom,
                    domain,
                    times,
                }
            }
        }
    }
}

#[component]
fn SwellReadout(row: Option<MarineObservation>) -> Element {
    let Some(row) = row else {
        return rsx! {
            div {
                style: "min-height: 52px; display: flex; align-items: center; color: #999; font-size: 13px; padding: 0 12px;",
                "Hover a chart to inspect an hour"
            }
        };
    };

    let rating = calculate_rating(
        row.wave_height,
        row.wind_speed,
        row.wind_direction,
        row.wave_direction,
    );
    let color = rating_color(rating);

    rsx! {
        div {
            style: "min-height: 52px; display: flex; flex-wrap: wrap; gap: 16px; align-items: center; padding: 0 12px;",
            span {
                style: "padding: 2px 10px; border-radius: 10px; font-size: 12px; font-weight: 700; background: {color}; color: #222;",
                "{rating}"
            }
            ReadoutValue {
                label: "Total",
                value: format!("{:.1}ft @ {:.0}s", units::metres_to_feet(row.wave_height), row.wave_period),
            }
            DirectionArrow { direction: row.wave_direction }
            ReadoutValue {
                label: "Swell",
                value: format!("{:.1}ft @ {:.0}s", units::metres_to_feet(row.swell_height), row.swell_period),
            }
            DirectionArrow { direction: row.swell_direction }
            ReadoutValue {
                label: "Secondary",
                value: format!("{:.1}ft @ {:.0}s", units::metres_to_feet(row.secondary_swell_height), row.secondary_swell_period),
            }
            DirectionArrow { direction: row.secondary_swell_direction }
        }
    }
}

// ───────────────────────────── Tide ─────────────────────────────

#[component]
pub fn TideSection() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let tides = state.display_tides();
        let is_mobile = (state.is_mobile)();
        let width = chart_width((state.viewport_width)(), is_mobile);
        let days = display_days(&state);

        let curve = interpolate_hourly(&tides);
        if curve.len() < 2 {
            js_bridge::destroy_chart(TIDE_CHART_ID);
            return;
        }

        let marks = daily_marks(&curve);
        let domain = tide_domain(&curve);
        let data = json!({
            "curve": curve.iter().map(|p| json!({
                "t": dates::epoch_millis(&p.time),
                "height": p.height,
            })).collect::<Vec<_>>(),
            "marks": marks.iter().map(|m| json!({
                "day": m.day,
                "high": {"t": dates::epoch_millis(&m.high.time), "height": m.high.height},
                "low": {"t": dates::epoch_millis(&m.low.time), "height": m.low.height},
            })).collect::<Vec<_>>(),
        });
        js_bridge::render_tide_chart(
            TIDE_CHART_ID,
            &data.to_string(),
            &chart_config(width, TIDE_MARGIN, domain, is_mobile, &days),
        );
    });

    let tides = state.display_tides();
    let curve = interpolate_hourly(&tides);
    if curve.len() < 2 {
        return rsx! {};
    }

    let is_mobile = (state.is_mobile)();
    let width = chart_width((state.viewport_width)(), is_mobile);
    let times: Vec<NaiveDateTime> = curve.iter().map(|p| p.time).collect();
    let domain = tide_domain(&curve);
    let hovered = (state.hovered_time)();
    let hovered_point = hovered.and_then(|t| curve.iter().find(|p| p.time == t).cloned());

    rsx! {
        section {
            ChartHeader {
                title: "Tide".to_string(),
                unit_description: "Height in metres, interpolated hourly between recorded extremes".to_string(),
            }
            TideReadout { point: hovered_point }
            ChartContainer {
                id: TIDE_CHART_ID.to_string(),
                min_height: CHART_HEIGHT,
                HoverOverlay {
                    margin: TIDE_MARGIN,
                    inner_width: width - TIDE_MARGIN.left - TIDE_MARGIN.right,
                    inner_height: CHART_HEIGHT - TIDE_MARGIN.top - TIDE_MARGIN.bottom,
                    domain,
                    times,
                }
            }
        }
    }
}

/// Tide chart domain: the curve extent padded 2% on both sides so the
/// area meets the chart edges smoothly. The swell/wind charts use the
/// unpadded extent, so perfect cross-chart hover alignment relies on all
/// charts sharing the same visible dates.
fn tide_domain(curve: &[TidePoint]) -> (i64, i64) {
    let times: Vec<NaiveDateTime> = curve.iter().map(|p| p.time).collect();
    let (t0, t1) = time_domain(&times);
    let pad = ((t1 - t0) as f64 * 0.02) as i64;
    (t0 - pad, t1 + pad)
}

#[component]
fn TideReadout(point: Option<TidePoint>) -> Element {
    let Some(point) = point else {
        return rsx! {
            div { style: "min-height: 32px;" }
        };
    };
    let time = point.time.format("%-I:%M%p").to_string();
    rsx! {
        div {
            style: "min-height: 32px; display: flex; gap: 16px; align-items: center; padding: 0 12px;",
            ReadoutValue {
                label: "Tide",
                value: format!("{:.1}m", point.height),
            }
            ReadoutValue {
                label: "At",
                value: time,
            }
        }
    }
}

// ───────────────────────────── Wind ─────────────────────────────

#[component]
pub fn WindSection() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let data = state.display_marine();
        let is_mobile = (state.is_mobile)();
        let width = chart_width((state.viewport_width)(), is_mobile);
        let days = display_days(&state);

        if data.is_empty() {
            js_bridge::destroy_chart(WIND_CHART_ID);
            return;
        }

        let times: Vec<NaiveDateTime> = data.iter().map(|d| d.date_time).collect();
        let domain = time_domain(&times);
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|d| {
                json!({
                    "t": dates::epoch_millis(&d.date_time),
                    "windSpeed": d.wind_speed,
                    "windDirection": d.wind_direction,
                    "gust": d.gust,
                })
            })
            .collect();
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        js_bridge::render_wind_chart(
            WIND_CHART_ID,
            &data_json,
            &chart_config(width, WIND_MARGIN, domain, is_mobile, &days),
        );
    });

    let data = state.display_marine();
    let is_mobile = (state.is_mobile)();
    let width = chart_width((state.viewport_width)(), is_mobile);
    let times: Vec<NaiveDateTime> = data.iter().map(|d| d.date_time).collect();
    let domain = time_domain(&times);
    let row = hovered_row(&state, &data);

    if data.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            ChartHeader {
                title: "Wind".to_string(),
                unit_description: "Speed in m/s with gusts dashed; arrows point downwind".to_string(),
            }
            WindReadout { row }
            div {
                style: "display: flex; gap: 16px; align-items: flex-start;",
                div {
                    style: "flex: 1; position: relative;",
                    ChartContainer {
                        id: WIND_CHART_ID.to_string(),
                        min_height: CHART_HEIGHT,
                        HoverOverlay {
                            margin: WIND_MARGIN,
                            inner_width: width - WIND_MARGIN.left - WIND_MARGIN.right,
                            inner_height: CHART_HEIGHT - WIND_MARGIN.top - WIND_MARGIN.bottom,
                            domain,
                            times,
                        }
                    }
                }
                if !is_mobile {
                    MiniMap {}
                }
            }
        }
    }
}

#[component]
fn WindReadout(row: Option<MarineObservation>) -> Element {
    let Some(row) = row else {
        return rsx! {
            div { style: "min-height: 32px;" }
        };
    };
    rsx! {
        div {
            style: "min-height: 32px; display: flex; gap: 16px; align-items: center; padding: 0 12px;",
            ReadoutValue {
                label: "Wind",
                value: format!("{:.1} m/s", row.wind_speed),
            }
            ReadoutValue {
                label: "Gust",
                value: format!("{:.1} m/s", row.gust),
            }
            DirectionArrow { direction: row.wind_direction }
        }
    }
}

/// Satellite inset centred on the selected beach, drawn beside the wind
/// chart on desktop.
#[component]
fn MiniMap() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        if let Some(beach) = state.selected_beach() {
            js_bridge::render_mini_map(MINI_MAP_ID, beach.lat, beach.lon);
        }
    });

    rsx! {
        div {
            id: MINI_MAP_ID,
            style: "width: 150px; height: 150px; border-radius: 8px; overflow: hidden; flex-shrink: 0;",
        }
    }
}

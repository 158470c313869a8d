//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The chart functions (D3.js) and the map functions (Leaflet) live in
//! `assets/js/*.js` and are embedded at compile time. The hosting page is
//! expected to load `d3` and `L` from a CDN; the init call polls for both
//! before evaluating the scripts at global scope and promoting the chart
//! functions to `window.*`. This module provides safe Rust wrappers that
//! serialize data and call those globals.

// Embed all chart/map JS files at compile time
static HOVER_JS: &str = include_str!("../assets/js/hover.js");
static SWELL_CHART_JS: &str = include_str!("../assets/js/swell-chart.js");
static WIND_CHART_JS: &str = include_str!("../assets/js/wind-chart.js");
static TIDE_CHART_JS: &str = include_str!("../assets/js/tide-chart.js");
static BEACH_MAP_JS: &str = include_str!("../assets/js/beach-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Surf JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart and map scripts with a wait-for-libraries polling loop.
///
/// The script files define functions via `function` declarations. To ensure
/// they become globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope via indirect `eval()` once
/// both D3 and Leaflet are ready, and each function is then explicitly
/// promoted to `window.*`.
pub fn init_charts() {
    let all_js = [
        HOVER_JS,
        SWELL_CHART_JS,
        WIND_CHART_JS,
        TIDE_CHART_JS,
        BEACH_MAP_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__surfChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__surfChartScripts);
                    delete window.__surfChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderSwellChart !== 'undefined') window.renderSwellChart = renderSwellChart;
                    if (typeof renderWindChart !== 'undefined') window.renderWindChart = renderWindChart;
                    if (typeof renderTideChart !== 'undefined') window.renderTideChart = renderTideChart;
                    if (typeof renderBeachMap !== 'undefined') window.renderBeachMap = renderBeachMap;
                    if (typeof renderMiniMap !== 'undefined') window.renderMiniMap = renderMiniMap;
                    if (typeof surfSetHover !== 'undefined') window.surfSetHover = surfSetHover;
                    if (typeof surfClearHover !== 'undefined') window.surfClearHover = surfClearHover;
                    window.__surfChartsReady = true;
                    console.log('Surf charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__surfChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Surf] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the swell chart (wave-height bars plus the rating strip).
pub fn render_swell_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSwellChart", container_id, data_json, config_json);
}

/// Render the wind chart (speed bars plus direction arrows).
pub fn render_wind_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderWindChart", container_id, data_json, config_json);
}

/// Render the tide chart (interpolated area/line plus daily extrema marks).
pub fn render_tide_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderTideChart", container_id, data_json, config_json);
}

/// Render the full-screen beach map with one marker per beach.
pub fn render_beach_map(container_id: &str, beaches_json: &str, config_json: &str) {
    render_when_ready("renderBeachMap", container_id, beaches_json, config_json);
}

/// Render the satellite mini-map inset centred on the selected beach.
pub fn render_mini_map(container_id: &str, lat: f64, lon: f64) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__surfChartsReady &&
                    typeof window.renderMiniMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderMiniMap('{container_id}', {lat}, {lon});
                    }} catch(e) {{ console.error('[Surf] renderMiniMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Move every registered chart's hover indicator to the given timestamp.
/// Each chart maps the timestamp through its own stored time scale.
pub fn set_hover(time_ms: i64) {
    call_js(&format!(
        "if (window.surfSetHover) window.surfSetHover({time_ms});"
    ));
}

/// Hide the hover indicator in every registered chart.
pub fn clear_hover() {
    call_js("if (window.surfClearHover) window.surfClearHover();");
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = ''; if (window.__surfCharts) delete window.__surfCharts['{}'];",
        container_id, container_id
    ));
}

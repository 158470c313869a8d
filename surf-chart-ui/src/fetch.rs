//! Runtime fetch of the static CSV tables.
//!
//! The tables are published next to the app bundle and fetched by relative
//! path, unversioned. There is no retry and no timeout; a failed fetch
//! surfaces as an error string in app state. The hourly and tide tables
//! are requested in parallel (both requests leave before either response
//! is awaited).

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Relative paths of the three published tables.
pub const BEACH_DETAILS_PATH: &str = "/data/beach/main_beach_details.csv";
pub const MARINE_OBSERVATIONS_PATH: &str = "/data/beach/main_storm_glass_details.csv";
pub const TIDE_EXTREMA_PATH: &str = "/data/beach/main_tide_details.csv";

/// Fetch one table as text.
pub async fn fetch_text(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window object")?;
    resolve_text(window.fetch_with_str(path), path).await
}

/// Fetch two tables in parallel. Both requests are issued before either
/// response is awaited, so the browser runs them concurrently.
pub async fn fetch_text_pair(
    path_a: &str,
    path_b: &str,
) -> (Result<String, String>, Result<String, String>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            return (
                Err("no window object".to_string()),
                Err("no window object".to_string()),
            )
        }
    };
    let promise_a = window.fetch_with_str(path_a);
    let promise_b = window.fetch_with_str(path_b);
    (
        resolve_text(promise_a, path_a).await,
        resolve_text(promise_b, path_b).await,
    )
}

async fn resolve_text(promise: js_sys::Promise, path: &str) -> Result<String, String> {
    let response = JsFuture::from(promise)
        .await
        .map_err(|e| format!("GET {path} failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| format!("GET {path}: not a Response"))?;
    if !response.ok() {
        return Err(format!("GET {path} failed: HTTP {}", response.status()));
    }
    let text_promise = response
        .text()
        .map_err(|e| format!("GET {path}: body unavailable: {e:?}"))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("GET {path}: body read failed: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| format!("GET {path}: body was not text"))
}

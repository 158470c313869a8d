//! Shared Dioxus components and JS bridge for the forecast dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions and the
//!   Leaflet map via `js_sys::eval()`
//! - `state`: Reactive `AppState` with Dioxus Signals
//! - `fetch`: Runtime fetch of the static CSV tables
//! - `theme`: The colour palette shared by RSX components and chart JS
//! - `components`: Reusable RSX components (top bar, search, navigation,
//!   containers)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod theme;

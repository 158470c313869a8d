//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Any chart writes the hovered timestamp;
//! all charts observe it, which is what keeps the hover indicators and the
//! mobile day paging synchronized across independently rendered charts.

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use surf_data::{BeachDetails, MarineObservation, TideExtremum};
use surf_db::Database;
use surf_forecast::{DayWindow, ForecastWindow};

/// Shared application state for the forecast dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the static tables are loaded)
    pub db: Signal<Option<Database>>,
    /// All beaches, for the map, the search box and URL resolution
    pub beaches: Signal<Vec<BeachDetails>>,
    /// Currently selected beach id (None shows the map view)
    pub selected_beach_id: Signal<Option<u32>>,
    /// Per-beach 4-day window, rebuilt on every selection change
    pub window: Signal<ForecastWindow>,
    /// Whether the beach list is still loading
    pub loading: Signal<bool>,
    /// Whether the selected beach's time series are loading
    pub loading_details: Signal<bool>,
    /// Error message if a fetch or parse failed
    pub error_msg: Signal<Option<String>>,
    /// The selected beach has no rows in its window (distinct from an error)
    pub no_data: Signal<bool>,
    /// Timestamp currently hovered in any chart
    pub hovered_time: Signal<Option<NaiveDateTime>>,
    /// Unique forecast days plus the mobile paging index
    pub day_window: Signal<DayWindow>,
    /// Viewport below the mobile breakpoint
    pub is_mobile: Signal<bool>,
    /// Viewport width in CSS pixels; charts re-render when it changes
    pub viewport_width: Signal<f64>,
}

/// Breakpoint below which the dashboard switches to single-day paging.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            beaches: Signal::new(Vec::new()),
            selected_beach_id: Signal::new(None),
            window: Signal::new(ForecastWindow::default()),
            loading: Signal::new(true),
            loading_details: Signal::new(false),
            error_msg: Signal::new(None),
            no_data: Signal::new(false),
            hovered_time: Signal::new(None),
            day_window: Signal::new(DayWindow::new()),
            is_mobile: Signal::new(false),
            viewport_width: Signal::new(1200.0),
        }
    }

    /// Refresh the viewport signals from `window.innerWidth`.
    pub fn sync_viewport(&mut self) {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1200.0);
        if *self.viewport_width.peek() != width {
            self.viewport_width.set(width);
        }
        let mobile = width < MOBILE_BREAKPOINT;
        if *self.is_mobile.peek() != mobile {
            self.is_mobile.set(mobile);
        }
    }

    /// The selected beach's metadata, if a known beach is selected.
    pub fn selected_beach(&self) -> Option<BeachDetails> {
        let id = (self.selected_beach_id)()?;
        self.beaches.read().iter().find(|b| b.beach_id == id).cloned()
    }

    /// Select a beach (or `None` for the map view), clearing any hover
    /// left over from the previous beach.
    pub fn select_beach(&mut self, id: Option<u32>) {
        self.hovered_time.set(None);
        self.selected_beach_id.set(id);
    }

    /// The hourly rows the charts should draw: the active day's slice on
    /// mobile, the whole window on desktop.
    pub fn display_marine(&self) -> Vec<MarineObservation> {
        let window = self.window.read();
        if (self.is_mobile)() {
            if let Some(day) = self.day_window.read().current_day() {
                return window.marine_for_day(day);
            }
        }
        window.marine.clone()
    }

    /// Tide extrema for the charts, sliced the same way as
    /// [`display_marine`](Self::display_marine).
    pub fn display_tides(&self) -> Vec<TideExtremum> {
        let window = self.window.read();
        if (self.is_mobile)() {
            if let Some(day) = self.day_window.read().current_day() {
                return window.tides_for_day(day);
            }
        }
        window.tides.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Surfcast -- browser surf-forecast dashboard.
//!
//! Data flow:
//! 1. On mount: fetch the beach details table, load it into the in-memory
//!    SQLite database, resolve the URL beach parameters (`beach`,
//!    `beachName`, `beachId` in that precedence).
//! 2. On beach change: fetch the hourly and tide tables in parallel, load
//!    them, query the beach's slices and build the 4-day window.
//! 3. Charts render through the D3 bridge; hover and day paging stay
//!    synchronized through the shared `AppState` signals.
//!
//! With no beach selected the app shows the full-screen selection map.

mod charts;
mod map_view;

use dioxus::prelude::*;
use surf_chart_ui::components::{BeachSearch, ErrorDisplay, LoadingSpinner, NoDataNotice, TopBar};
use surf_chart_ui::state::AppState;
use surf_chart_ui::theme::DEFAULT_THEME;
use surf_chart_ui::{fetch, js_bridge};
use surf_db::Database;
use surf_forecast::{parse_query, resolve_beach_selection, ForecastWindow};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("forecast-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one-time init -- viewport, chart scripts, beach table ───
    use_effect(move || {
        state.sync_viewport();
        js_bridge::init_charts();

        spawn(async move {
            state.loading.set(true);
            state.error_msg.set(None);

            let csv = match fetch::fetch_text(fetch::BEACH_DETAILS_PATH).await {
                Ok(csv) => csv,
                Err(e) => {
                    log::error!("beach details fetch failed: {e}");
                    state.error_msg.set(Some(e));
                    state.loading.set(false);
                    return;
                }
            };

            let db = match Database::new().and_then(|db| {
                db.load_beaches(&csv)?;
                Ok(db)
            }) {
                Ok(db) => db,
                Err(e) => {
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                    return;
                }
            };

            let beaches = match db.query_beaches() {
                Ok(beaches) => beaches,
                Err(e) => {
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                    return;
                }
            };

            // Resolve the URL parameters against the loaded beach list.
            let query = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let params = parse_query(&query);
            let mut selected = resolve_beach_selection(&params, &beaches);

            // No URL selection on a phone: open the first beach directly
            // instead of the map.
            if selected.is_none() && *state.is_mobile.peek() {
                selected = beaches.first().map(|b| b.beach_id);
            }

            state.beaches.set(beaches);
            state.db.set(Some(db));
            state.loading.set(false);
            if selected.is_some() {
                state.select_beach(selected);
            }
        });
    });

    // ─── Effect 2: on beach change, fetch the two time-series tables ───
    // The in-flight result of a superseded selection is simply applied; the
    // last write wins, matching the unguarded original behaviour.
    use_effect(move || {
        let selected = (state.selected_beach_id)();
        let beaches = state.beaches.read().clone();
        let Some(id) = selected else { return };
        let Some(beach) = beaches.into_iter().find(|b| b.beach_id == id) else {
            return;
        };

        spawn(async move {
            state.loading_details.set(true);

            let (marine_res, tide_res) = fetch::fetch_text_pair(
                fetch::MARINE_OBSERVATIONS_PATH,
                fetch::TIDE_EXTREMA_PATH,
            )
            .await;

            let Some(db) = state.db.peek().clone() else {
                state.loading_details.set(false);
                return;
            };

            // The two data domains load independently; one missing table
            // must not block the other's display.
            let mut first_error = None;
            match &marine_res {
                Ok(csv) => {
                    if let Err(e) = db.load_marine_observations(csv) {
                        log::warn!("marine table load failed: {e}");
                        first_error.get_or_insert(e.to_string());
                    }
                }
                Err(e) => {
                    log::warn!("marine table fetch failed: {e}");
                    first_error.get_or_insert(e.clone());
                }
            }
            match &tide_res {
                Ok(csv) => {
                    if let Err(e) = db.load_tides(csv) {
                        log::warn!("tide table load failed: {e}");
                        first_error.get_or_insert(e.to_string());
                    }
                }
                Err(e) => {
                    log::warn!("tide table fetch failed: {e}");
                    first_error.get_or_insert(e.clone());
                }
            }

            if marine_res.is_err() && tide_res.is_err() {
                state.error_msg.set(first_error);
                state.loading_details.set(false);
                return;
            }

            let marine = db.query_marine_for_beach(id).unwrap_or_default();
            let tides = db.query_tides_for_beach(id).unwrap_or_default();
            let window = ForecastWindow::build(&marine, &tides, &beach);

            state.no_data.set(window.is_no_data());
            state.day_window.write().set_days(window.days.clone());
            state.window.set(window);
            state.error_msg.set(None);
            state.loading_details.set(false);
        });
    });

    let error = state.error_msg.read().clone();
    let selected = state.selected_beach();
    let loading = (state.loading)();
    let loading_details = (state.loading_details)();
    let no_data = (state.no_data)();

    rsx! {
        main {
            style: "position: relative; min-height: 100vh; width: 100%; background: white; font-family: system-ui, -apple-system, sans-serif; color: {DEFAULT_THEME.deep_ocean};",
            onresize: move |_| state.sync_viewport(),

            Header {}

            if let Some(err) = error {
                ErrorDisplay { message: err }
            }

            if loading {
                LoadingSpinner {}
            } else if let Some(beach) = selected {
                if no_data {
                    NoDataNotice { beach_name: beach.beach_name.clone() }
                } else if loading_details {
                    LoadingSpinner {}
                } else {
                    div {
                        style: "max-width: 1400px; margin: 16px auto 0 auto; display: flex; flex-direction: column; gap: 16px; padding-bottom: 32px;",
                        TopBar {}
                        charts::ForecastCharts {}
                    }
                }
            } else {
                map_view::MapView {}
            }
        }
    }
}

/// Sticky header: logo (click resets to the map view) plus the search box.
#[component]
fn Header() -> Element {
    let mut state = use_context::<AppState>();
    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; gap: 16px; padding: 10px 16px; border-bottom: 1px solid #eee; position: sticky; top: 0; background: white; z-index: 50;",
            button {
                style: "background: none; border: none; cursor: pointer; font-size: 20px; font-weight: 800; color: {DEFAULT_THEME.ocean_blue}; padding: 0;",
                onclick: move |_| state.select_beach(None),
                "Surfcast"
            }
            BeachSearch {}
        }
    }
}

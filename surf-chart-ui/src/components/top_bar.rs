//! Top bar: beach title, day labels, and the expandable spot-info section.

use crate::components::DayNavigation;
use crate::state::AppState;
use crate::theme::DEFAULT_THEME;
use dioxus::prelude::*;
use surf_utils::dates;

fn format_day_label(day: &str) -> String {
    match dates::parse_date(day) {
        Ok(date) => date.format("%a %b %-d").to_string(),
        Err(_) => day.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpotDetailProps {
    label: &'static str,
    value: String,
    long_text: String,
}

#[component]
fn SpotDetail(props: SpotDetailProps) -> Element {
    if props.value.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "min-width: 160px;",
            div {
                style: "font-size: 11px; text-transform: uppercase; letter-spacing: 0.05em; color: #888;",
                "{props.label}"
            }
            div {
                style: "font-weight: 600; color: {DEFAULT_THEME.deep_ocean};",
                "{props.value}"
            }
            if !props.long_text.is_empty() {
                div {
                    style: "font-size: 12px; color: #666; margin-top: 2px;",
                    "{props.long_text}"
                }
            }
        }
    }
}

/// Beach title, the 4-day labels (desktop) or day paging (mobile), and an
/// expandable section with the beach's descriptive metadata.
#[component]
pub fn TopBar() -> Element {
    let state = use_context::<AppState>();
    let mut show_details = use_signal(|| false);

    let Some(beach) = state.selected_beach() else {
        return rsx! {};
    };
    let days = state.window.read().days.clone();
    let is_mobile = (state.is_mobile)();
    let active_day = state.day_window.read().index();

    rsx! {
        div {
            style: "width: 100%;",
            div {
                style: "display: flex; align-items: baseline; justify-content: space-between; flex-wrap: wrap; gap: 8px; padding: 0 12px;",
                div {
                    h2 {
                        style: "margin: 0; font-size: 22px; color: {DEFAULT_THEME.deep_ocean};",
                        "{beach.beach_name}"
                    }
                    p {
                        style: "margin: 2px 0 0 0; font-size: 13px; color: #666;",
                        "{beach.area} · {beach.region}, {beach.country}"
                    }
                }
                button {
                    style: "background: none; border: 1px solid {DEFAULT_THEME.ocean_blue}; color: {DEFAULT_THEME.ocean_blue}; border-radius: 6px; padding: 4px 12px; font-size: 13px; cursor: pointer;",
                    onclick: move |_| {
                        let open = show_details();
                        show_details.set(!open);
                    },
                    if show_details() { "Hide spot info" } else { "Spot info" }
                }
            }

            if show_details() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; padding: 12px; margin: 8px 12px; background: #f7fafc; border-radius: 8px;",
                    if !beach.beach_text_summary.is_empty() {
                        p {
                            style: "width: 100%; margin: 0; font-size: 13px; color: #444;",
                            "{beach.beach_text_summary}"
                        }
                    }
                    SpotDetail {
                        label: "Ability level",
                        value: beach.ability_level.clone(),
                        long_text: beach.ability_level_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Local vibe",
                        value: beach.local_vibe.clone(),
                        long_text: beach.local_vibe_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Crowd factor",
                        value: beach.crowd_factor.clone(),
                        long_text: beach.crowd_factor_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Spot rating",
                        value: beach.spot_rating.clone(),
                        long_text: beach.spot_rating_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Shoulder burn",
                        value: beach.shoulder_burn.clone(),
                        long_text: beach.shoulder_burn_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Water quality",
                        value: beach.water_quality.clone(),
                        long_text: beach.water_quality_long_text.clone(),
                    }
                    SpotDetail {
                        label: "Hazards",
                        value: beach.hazards.clone(),
                        long_text: String::new(),
                    }
                    SpotDetail {
                        label: "Seabed",
                        value: beach.seabed.clone(),
                        long_text: String::new(),
                    }
                    SpotDetail {
                        label: "Best season",
                        value: beach.best_season.clone(),
                        long_text: String::new(),
                    }
                }
            }

            if is_mobile {
                DayNavigation {}
            } else {
                div {
                    style: "display: flex; justify-content: space-between; padding: 12px 12px 0 12px;",
                    for (i, day) in days.iter().enumerate() {
                        span {
                            key: "{day}",
                            style: if i == active_day {
                                format!("font-size: 13px; font-weight: 700; color: {};", DEFAULT_THEME.deep_ocean)
                            } else {
                                "font-size: 13px; color: #888;".to_string()
                            },
                            "{format_day_label(day)}"
                        }
                    }
                }
            }
        }
    }
}

//! Previous/next day controls for the mobile single-day paging mode.

use crate::state::AppState;
use crate::theme::DEFAULT_THEME;
use dioxus::prelude::*;
use surf_utils::dates;

/// The viewer's local calendar date as a "YYYY-MM-DD" key.
fn today_key() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

fn format_day_label(day: &str) -> String {
    match dates::parse_date(day) {
        Ok(date) => date.format("%a %b %-d").to_string(),
        Err(_) => day.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavigationButtonProps {
    pub disabled: bool,
    pub aria_label: String,
    pub onclick: EventHandler<MouseEvent>,
    children: Element,
}

#[component]
fn NavigationButton(props: NavigationButtonProps) -> Element {
    let opacity = if props.disabled { "0.5" } else { "1" };
    let cursor = if props.disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            disabled: props.disabled,
            aria_label: "{props.aria_label}",
            style: "width: 40px; height: 40px; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: white; border: 1px solid {DEFAULT_THEME.sunset_orange}; opacity: {opacity}; cursor: {cursor};",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}

/// Day label plus previous/next buttons. Paging is clamped to the day
/// list; the back button is additionally disabled on today's date.
#[component]
pub fn DayNavigation() -> Element {
    let mut state = use_context::<AppState>();
    let day_window = state.day_window.read().clone();
    let current = day_window.current_day().map(str::to_string);

    let is_today = current.as_deref() == Some(today_key().as_str());
    let back_disabled = day_window.is_first() || is_today;
    let forward_disabled = day_window.is_last();

    let label = current
        .as_deref()
        .map(format_day_label)
        .unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; width: 100%; padding: 16px 24px 0 24px;",
            span {
                style: "font-size: 14px; font-weight: 500;",
                "{label}"
            }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                NavigationButton {
                    disabled: back_disabled,
                    aria_label: "Previous day".to_string(),
                    onclick: move |_| {
                        state.day_window.write().previous();
                        state.hovered_time.set(None);
                    },
                    svg {
                        width: "18",
                        height: "18",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        path { d: "M15 18l-6-6 6-6" }
                    }
                }
                NavigationButton {
                    disabled: forward_disabled,
                    aria_label: "Next day".to_string(),
                    onclick: move |_| {
                        state.day_window.write().next();
                        state.hovered_time.set(None);
                    },
                    svg {
                        width: "18",
                        height: "18",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        path { d: "M9 18l6-6-6-6" }
                    }
                }
            }
        }
    }
}

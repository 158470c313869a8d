//! Beach search box with inline result list.

use crate::state::AppState;
use dioxus::prelude::*;

const MAX_RESULTS: usize = 8;

/// Text search over beach names and areas. Clicking a result selects the
/// beach and clears the input.
#[component]
pub fn BeachSearch() -> Element {
    let mut state = use_context::<AppState>();
    let mut search_term = use_signal(String::new);

    let beaches = state.beaches.read().clone();
    let loading = (state.loading)();
    let term = search_term();
    let needle = term.to_lowercase();

    let matches: Vec<_> = if needle.is_empty() {
        Vec::new()
    } else {
        beaches
            .iter()
            .filter(|b| {
                b.beach_name.to_lowercase().contains(&needle)
                    || b.area.to_lowercase().contains(&needle)
            })
            .take(MAX_RESULTS)
            .cloned()
            .collect()
    };

    let placeholder = if loading {
        "Loading beaches..."
    } else {
        "Search beaches..."
    };

    rsx! {
        div {
            style: "position: relative; width: 100%; max-width: 280px;",
            input {
                r#type: "text",
                value: "{term}",
                placeholder: "{placeholder}",
                disabled: loading,
                style: "width: 100%; height: 40px; padding: 0 12px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px;",
                oninput: move |evt| search_term.set(evt.value()),
            }
            if !matches.is_empty() {
                ul {
                    style: "position: absolute; top: 100%; left: 0; right: 0; margin: 4px 0 0 0; padding: 4px 0; list-style: none; background: white; border: 1px solid #e0e0e0; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); max-height: 300px; overflow-y: auto; z-index: 60;",
                    for beach in matches {
                        li {
                            key: "{beach.beach_id}",
                            style: "padding: 8px 12px; cursor: pointer; font-size: 14px;",
                            onclick: {
                                let id = beach.beach_id;
                                move |_| {
                                    state.select_beach(Some(id));
                                    search_term.set(String::new());
                                }
                            },
                            div {
                                style: "font-weight: 500;",
                                "{beach.beach_name}"
                            }
                            div {
                                style: "font-size: 12px; color: #666; margin-top: 2px;",
                                "{beach.area} · {beach.region} · {beach.ability_level}"
                            }
                        }
                    }
                }
            }
        }
    }
}

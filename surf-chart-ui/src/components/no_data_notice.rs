//! Friendly notice for beaches without forecast coverage.
//!
//! An empty window is a normal state, not a failure, so this renders as a
//! message rather than through `ErrorDisplay`.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoDataNoticeProps {
    pub beach_name: String,
}

/// Shown when the selected beach has no swell or tide rows in its window.
#[component]
pub fn NoDataNotice(props: NoDataNoticeProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; padding: 0 16px; text-align: center;",
            div {
                style: "font-size: 56px; margin-bottom: 16px;",
                "🌊"
            }
            h2 {
                style: "font-size: 24px; font-weight: bold; color: #333; margin: 0 0 8px 0;",
                "No Data Available"
            }
            p {
                style: "color: #666; margin: 0 0 16px 0; max-width: 420px;",
                "Sorry, there's no swell and tidal data available for {props.beach_name} at the moment."
            }
            p {
                style: "font-size: 13px; color: #999; margin: 0;",
                "Please try selecting a different beach or check back later for updated forecasts."
            }
        }
    }
}

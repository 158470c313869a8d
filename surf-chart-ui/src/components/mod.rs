//! Reusable Dioxus RSX components for the forecast dashboard.

mod beach_search;
mod chart_container;
mod chart_header;
mod day_navigation;
mod error_display;
mod loading_spinner;
mod no_data_notice;
mod top_bar;

pub use beach_search::BeachSearch;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use day_navigation::DayNavigation;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data_notice::NoDataNotice;
pub use top_bar::TopBar;

//! Pure data transforms behind the forecast dashboard.
//!
//! Everything in this crate is deterministic and free of UI or I/O
//! concerns: tide-curve interpolation, day bucketing and the 4-day window,
//! the surf rating heuristic, the shared nearest-point hover rule, and
//! URL-parameter beach selection. The app and the CLI both sit on top of
//! these.

pub mod hover;
pub mod rating;
pub mod selection;
pub mod tide_curve;
pub mod window;

pub use hover::{nearest_index, DayWindow};
pub use rating::{calculate_rating, Rating};
pub use selection::{parse_query, resolve_beach_selection};
pub use tide_curve::{daily_marks, interpolate_hourly, DailyTideMarks, TidePoint};
pub use window::{clip_to_first_days, unique_days, ForecastWindow, Timestamped, FORECAST_DAYS};

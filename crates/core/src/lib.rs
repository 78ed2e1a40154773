//! Calendar overlap layout for a day of time entries.
//!
//! ```text
//!   entries ──▶ assign_lanes ──▶ (entry, Lane) ──▶ layout_box ──▶ LayoutBox ──▶ renderer
//! ```
//!
//! [`views::lanes`] decides which horizontal lane each interval occupies;
//! [`views::day_column`] turns an interval and its lane into percentage
//! offsets inside one day column. Both are pure and allocate fresh output
//! on every call.

pub mod error;
pub mod model;
pub mod parsers;
pub mod views;

pub use error::LayoutError;
pub use model::{Day, TimeEntry, TimeSpan};
pub use views::day_column::{layout_box, layout_day};
pub use views::lanes::{LaneRecord, assign_lanes};

pub mod layout;
pub mod types;

pub use layout::{DayColumn, LayoutBox, PlacedEntry};
pub use types::{Interval, InvertedInterval, InvertedLane, Lane};

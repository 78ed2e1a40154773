pub mod day;
pub mod span;

pub use day::Day;
pub use span::{TimeEntry, TimeSpan};

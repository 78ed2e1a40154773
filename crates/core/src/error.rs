use chrono::NaiveDate;
use daylane_protocol::{InvertedInterval, InvertedLane};
use thiserror::Error;

/// Caller contract violations. The engine reports these instead of
/// clamping or repairing the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("input #{index}: {source}")]
    InvertedInput {
        index: usize,
        source: InvertedInterval,
    },
    #[error(transparent)]
    InvertedInterval(#[from] InvertedInterval),
    #[error(transparent)]
    InvertedLane(#[from] InvertedLane),
    #[error("midnight of {date} does not exist in the requested time zone")]
    NonexistentMidnight { date: NaiveDate },
    #[error("{date} is the last representable day")]
    DateOutOfRange { date: NaiveDate },
}

use chrono::{DateTime, Utc};
use daylane_protocol::{Interval, InvertedInterval};
use serde::{Deserialize, Serialize};

/// Anything with a start instant and an optional end instant.
///
/// The lane assigner is generic over this so caller records can be
/// annotated by reference instead of being copied into `Interval`s.
pub trait TimeSpan {
    fn start(&self) -> DateTime<Utc>;

    /// `None` while the span is still running.
    fn end(&self) -> Option<DateTime<Utc>>;

    fn validate(&self) -> Result<(), InvertedInterval> {
        let start = self.start();
        match self.end() {
            Some(end) if end < start => Err(InvertedInterval { start, end }),
            _ => Ok(()),
        }
    }
}

impl TimeSpan for Interval {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }
}

impl<T: TimeSpan + ?Sized> TimeSpan for &T {
    fn start(&self) -> DateTime<Utc> {
        (**self).start()
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        (**self).end()
    }
}

/// A tracked stretch of work as handed over by the time-tracking store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    /// Free-text description shown on the bar.
    pub label: Option<String>,
    pub interval: Interval,
}

impl TimeEntry {
    pub fn new(id: u64, interval: Interval) -> Self {
        Self {
            id,
            label: None,
            interval,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl TimeSpan for TimeEntry {
    fn start(&self) -> DateTime<Utc> {
        self.interval.start
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.interval.end
    }
}

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A time range with a required start and an optional end.
///
/// A missing `end` marks an interval that is still running. Zero-length
/// intervals (`start == end`) are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("interval ends at {end} before it starts at {start}")]
pub struct InvertedInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// A closed interval. Fails when `end` precedes `start`.
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvertedInterval> {
        if end < start {
            return Err(InvertedInterval { start, end });
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// An interval with no end yet.
    pub fn open(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed time between start and end, or `None` while open.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }
}

/// Lane assignment for one interval: the column it occupies and the
/// deepest column reached by the chain it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub elevation: u32,
    pub max_elevation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("elevation {elevation} exceeds max elevation {max_elevation}")]
pub struct InvertedLane {
    pub elevation: u32,
    pub max_elevation: u32,
}

impl Lane {
    /// Lane of an interval that overlaps nothing.
    pub const ROOT: Lane = Lane {
        elevation: 0,
        max_elevation: 0,
    };

    pub fn new(elevation: u32, max_elevation: u32) -> Result<Self, InvertedLane> {
        let lane = Self {
            elevation,
            max_elevation,
        };
        lane.validate()?;
        Ok(lane)
    }

    /// Check `max_elevation >= elevation` for lanes built field-by-field
    /// (e.g. deserialized from a caller).
    pub fn validate(&self) -> Result<(), InvertedLane> {
        if self.max_elevation < self.elevation {
            return Err(InvertedLane {
                elevation: self.elevation,
                max_elevation: self.max_elevation,
            });
        }
        Ok(())
    }

    /// Number of horizontal slots the chain is split into.
    pub fn lane_count(&self) -> u32 {
        self.max_elevation.saturating_add(1)
    }
}

impl Default for Lane {
    fn default() -> Self {
        Self::ROOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, h, m, 0).unwrap()
    }

    #[test]
    fn closed_rejects_inverted_range() {
        let err = Interval::closed(at(10, 0), at(9, 0)).unwrap_err();
        assert_eq!(err.start, at(10, 0));
        assert_eq!(err.end, at(9, 0));
    }

    #[test]
    fn zero_length_interval_is_valid() {
        let interval = Interval::closed(at(9, 0), at(9, 0)).unwrap();
        assert_eq!(interval.duration(), Some(TimeDelta::zero()));
        assert!(!interval.is_open());
    }

    #[test]
    fn open_interval_has_no_duration() {
        let interval = Interval::open(at(9, 0));
        assert!(interval.is_open());
        assert_eq!(interval.duration(), None);
    }

    #[test]
    fn lane_rejects_max_below_elevation() {
        assert!(Lane::new(2, 1).is_err());
        assert_eq!(Lane::new(1, 3).unwrap().lane_count(), 4);
        assert_eq!(Lane::default(), Lane::ROOT);
    }

    #[test]
    fn lane_serializes_camel_case() {
        let json = serde_json::to_string(&Lane::new(1, 2).unwrap()).unwrap();
        assert_eq!(json, r#"{"elevation":1,"maxElevation":2}"#);
    }

    #[test]
    fn interval_end_defaults_to_open() {
        let interval: Interval =
            serde_json::from_str(r#"{"start":"2024-03-14T09:00:00Z"}"#).unwrap();
        assert_eq!(interval, Interval::open(at(9, 0)));
    }
}

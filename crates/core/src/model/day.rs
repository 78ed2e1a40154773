use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::error::LayoutError;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A calendar day resolved to absolute instants in some time zone.
///
/// `start` is local midnight of `date`; `end` is local midnight of the
/// following date and acts as the inclusive upper clamp bound, so an
/// interval running past midnight reaches exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Day {
    /// A day in UTC. Always exactly 24 hours long.
    pub fn utc(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            date,
            start,
            end: start + TimeDelta::days(1),
        }
    }

    /// A day in an arbitrary time zone. Across a DST change the day is
    /// 23 or 25 hours long.
    pub fn in_zone<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<Self, LayoutError> {
        let next = date
            .succ_opt()
            .ok_or(LayoutError::DateOutOfRange { date })?;
        Ok(Self {
            date,
            start: local_midnight(date, tz)?,
            end: local_midnight(next, tz)?,
        })
    }

    /// The day in `tz` that `instant` falls on.
    pub fn containing<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Result<Self, LayoutError> {
        let date = instant.with_timezone(tz).date_naive();
        Self::in_zone(date, tz)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Pull `instant` into `[start, end]`.
    pub fn clamp(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.clamp(self.start, self.end)
    }

    /// Share of a 24h day elapsed between midnight and `instant`, as a
    /// percentage. Measured in whole elapsed seconds from `start` (sub-second
    /// parts are truncated) rather than as a fraction of `end - start`.
    pub fn percent_of_day(&self, instant: DateTime<Utc>) -> f64 {
        let elapsed = (instant - self.start).num_seconds() as f64;
        elapsed / SECONDS_PER_DAY * 100.0
    }
}

fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>, LayoutError> {
    match tz.from_local_datetime(&date.and_time(NaiveTime::MIN)) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(LayoutError::NonexistentMidnight { date }),
    }
}

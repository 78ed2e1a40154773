use daylane_protocol::{DayColumn, Lane, LayoutBox, PlacedEntry};
use tracing::trace;

use crate::error::LayoutError;
use crate::model::{Day, TimeEntry, TimeSpan};
use crate::views::lanes::assign_lanes;

/// Position one span inside the column of `day`.
///
/// `top`/`height` are time-of-day percentages after clamping the span to
/// the day, so an entry crossing midnight only covers its in-day part.
/// `left` is the lane's slot boundary and `width` runs to the right edge:
/// deeper lanes overlay shallower ones instead of splitting into equal
/// columns.
pub fn layout_box<T: TimeSpan + ?Sized>(
    day: &Day,
    span: &T,
    lane: Lane,
) -> Result<LayoutBox, LayoutError> {
    span.validate()?;
    lane.validate()?;

    let top = day.percent_of_day(day.clamp(span.start()));
    let height = span
        .end()
        .map(|end| day.percent_of_day(day.clamp(end)) - top);

    let slots = f64::from(lane.max_elevation) + 1.0;
    let left = f64::from(lane.elevation) / slots * 100.0;

    trace!(top, left, ?height, "layout box");
    Ok(LayoutBox {
        top,
        left,
        width: 100.0 - left,
        height,
    })
}

/// Assign lanes to `entries` and position each one in the column of `day`.
///
/// Entries come back in lane-assignment order. The caller is responsible
/// for handing in only entries that belong to `day`; anything outside it is
/// clamped to the day's edges.
pub fn layout_day(day: &Day, entries: &[TimeEntry]) -> Result<DayColumn, LayoutError> {
    let placed = assign_lanes(entries)?
        .into_iter()
        .map(|record| {
            let entry = record.source;
            Ok(PlacedEntry {
                id: entry.id,
                label: entry.label.clone(),
                interval: entry.interval,
                lane: record.lane,
                layout: layout_box(day, entry, record.lane)?,
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(DayColumn {
        date: day.date(),
        entries: placed,
    })
}

use chrono::{FixedOffset, NaiveDate};
use daylane_core::model::Day;
use daylane_core::parsers::parse_entries;
use daylane_protocol::{Interval, Lane};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct LaneRow {
    id: u64,
    #[serde(flatten)]
    lane: Lane,
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn resolve_day(date: &str, offset_minutes: i32) -> Result<Day, JsError> {
    let date: NaiveDate = date.parse().map_err(js_err)?;
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| JsError::new("utc offset out of range"))?;
    Day::in_zone(date, &offset).map_err(js_err)
}

/// Assign lanes to a JSON array of time entries.
///
/// Returns a JSON array of `{id, elevation, maxElevation}` in lane order.
#[wasm_bindgen]
pub fn assign_lanes(entries_json: &str) -> Result<String, JsError> {
    let entries = parse_entries(entries_json.as_bytes()).map_err(js_err)?;
    let rows: Vec<LaneRow> = daylane_core::assign_lanes(&entries)
        .map_err(js_err)?
        .into_iter()
        .map(|r| LaneRow {
            id: r.source.id,
            lane: r.lane,
        })
        .collect();
    serde_json::to_string(&rows).map_err(js_err)
}

/// Lay out a whole day column. `date` is `YYYY-MM-DD`; `offset_minutes` is
/// the day's UTC offset (east positive, e.g. `120` for UTC+2).
#[wasm_bindgen]
pub fn layout_day(entries_json: &str, date: &str, offset_minutes: i32) -> Result<String, JsError> {
    let entries = parse_entries(entries_json.as_bytes()).map_err(js_err)?;
    let day = resolve_day(date, offset_minutes)?;
    let column = daylane_core::layout_day(&day, &entries).map_err(js_err)?;
    serde_json::to_string(&column).map_err(js_err)
}

/// Box for a single interval in an already known lane, for per-frame
/// updates of a running entry without redoing lane assignment.
#[wasm_bindgen]
pub fn layout_box(
    interval_json: &str,
    date: &str,
    offset_minutes: i32,
    elevation: u32,
    max_elevation: u32,
) -> Result<String, JsError> {
    let interval: Interval = serde_json::from_str(interval_json).map_err(js_err)?;
    let lane = Lane::new(elevation, max_elevation).map_err(js_err)?;
    let day = resolve_day(date, offset_minutes)?;
    let layout = daylane_core::layout_box(&day, &interval, lane).map_err(js_err)?;
    serde_json::to_string(&layout).map_err(js_err)
}

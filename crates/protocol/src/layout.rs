use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Interval, Lane};

/// Day-relative bounding box, every field a percentage of the day column.
///
/// `top`/`height` come from time of day; `left`/`width` come from the lane.
/// `height` is `None` for an open-ended interval and the renderer decides
/// how far down to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// One time entry positioned inside a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntry {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub interval: Interval,
    pub lane: Lane,
    pub layout: LayoutBox,
}

/// All entries of one day, in lane-assignment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub entries: Vec<PlacedEntry>,
}

impl DayColumn {
    /// Widest chain in the column, i.e. the most slots any entry is split into.
    pub fn lane_count(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.lane.lane_count())
            .max()
            .unwrap_or(0)
    }
}

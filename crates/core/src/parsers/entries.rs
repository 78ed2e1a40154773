use chrono::{DateTime, Utc};
use daylane_protocol::Interval;
use serde::Deserialize;

use super::ParseError;
use crate::model::{TimeEntry, TimeSpan};

/// Either a bare array of entries or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<RawEntry>),
    Wrapped { entries: Vec<RawEntry> },
}

#[derive(Deserialize)]
struct RawEntry {
    id: Option<u64>,
    #[serde(alias = "description")]
    label: Option<String>,
    start: DateTime<Utc>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
}

/// Parse time entries exported by the tracking store.
///
/// Accepts `[{...}, ...]` or `{"entries": [...]}`. Each entry needs an
/// RFC 3339 `start`; `end` may be missing or `null` for a running entry.
/// Ids are either given on every entry or on none; without them each
/// entry's id is its position.
pub fn parse_entries(data: &[u8]) -> Result<Vec<TimeEntry>, ParseError> {
    let raw = match serde_json::from_slice::<Document>(data)? {
        Document::List(entries) | Document::Wrapped { entries } => entries,
    };

    if raw.iter().any(|e| e.id.is_some())
        && let Some(position) = raw.iter().position(|e| e.id.is_none())
    {
        return Err(ParseError::MixedIds { position });
    }

    raw.into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let id = entry.id.unwrap_or(position as u64);
            let interval = Interval {
                start: entry.start,
                end: entry.end,
            };
            interval
                .validate()
                .map_err(|source| ParseError::InvertedEntry { id, source })?;
            Ok(TimeEntry {
                id,
                label: entry.label,
                interval,
            })
        })
        .collect()
}

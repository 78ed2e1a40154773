pub mod entries;

use daylane_protocol::InvertedInterval;
use thiserror::Error;

pub use entries::parse_entries;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {id}: {source}")]
    InvertedEntry { id: u64, source: InvertedInterval },
    #[error("entry at position {position} has no id while others do")]
    MixedIds { position: usize },
}

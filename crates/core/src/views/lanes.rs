use std::cmp::Ordering;

use chrono::{DateTime, TimeDelta, Utc};
use daylane_protocol::Lane;
use tracing::debug;

use crate::error::LayoutError;
use crate::model::TimeSpan;

/// How far past its own start an interval reaches when testing whether the
/// next interval must move into another lane. Independent of the
/// interval's real duration so a running or zero-length entry still claims
/// room next to it.
pub const PROBE_WINDOW_MINUTES: i64 = 30;

/// A source span paired with the lane it was assigned.
#[derive(Debug)]
pub struct LaneRecord<'a, T> {
    pub source: &'a T,
    pub lane: Lane,
}

impl<T> Clone for LaneRecord<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LaneRecord<'_, T> {}

/// Start ascending, then end descending. An open end counts as later than
/// any closed one, so running entries lead their start-time ties.
pub fn canonical_order<T: TimeSpan + ?Sized>(a: &T, b: &T) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| match (a.end(), b.end()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_end), Some(b_end)) => b_end.cmp(&a_end),
        })
}

/// Whether `candidate` falls inside the probe window anchored at
/// `current.start`. Bounds are inclusive; an open candidate extends forever.
pub fn chains<T: TimeSpan + ?Sized, U: TimeSpan + ?Sized>(current: &T, candidate: &U) -> bool {
    let probe_start = current.start();
    let probe_end = probe_start
        .checked_add_signed(TimeDelta::minutes(PROBE_WINDOW_MINUTES))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    candidate.start() <= probe_end && candidate.end().is_none_or(|end| end >= probe_start)
}

/// Assign a lane to every span.
///
/// Output is in canonical order, not input order. Spans are grouped into
/// chains of consecutive (sorted) spans where each one falls in the probe
/// window of its predecessor; every link moves one lane to the right and
/// every member learns the deepest lane reached below it. This is a
/// sequential heuristic: overlaps between spans that are not consecutive in
/// one chain are not reconciled.
pub fn assign_lanes<T: TimeSpan>(spans: &[T]) -> Result<Vec<LaneRecord<'_, T>>, LayoutError> {
    for (index, span) in spans.iter().enumerate() {
        span.validate()
            .map_err(|source| LayoutError::InvertedInput { index, source })?;
    }

    let mut sorted: Vec<&T> = spans.iter().collect();
    sorted.sort_by(|a, b| canonical_order(*a, *b));

    let lanes = consume_chains(&sorted);
    Ok(sorted
        .into_iter()
        .zip(lanes)
        .map(|(source, lane)| LaneRecord { source, lane })
        .collect())
}

/// One pending member of the chain being consumed.
struct Link {
    index: usize,
    elevation: u32,
    max_elevation: u32,
}

/// Walk `sorted` once, consuming chains depth-first.
///
/// A link stays on the stack while the next unconsumed span chains to it.
/// When it stops, the link is finalized and its max elevation folded into
/// its parent, which then tests the same next span against itself. A
/// member's `max_elevation` is written only after everything below it has
/// reported.
fn consume_chains<T: TimeSpan>(sorted: &[&T]) -> Vec<Lane> {
    let mut lanes = vec![Lane::ROOT; sorted.len()];
    let mut stack: Vec<Link> = Vec::new();
    let mut cursor = 0;

    while cursor < sorted.len() {
        let root = cursor;
        stack.push(Link {
            index: root,
            elevation: 0,
            max_elevation: 0,
        });
        cursor += 1;

        while let Some(tip) = stack.last() {
            if cursor < sorted.len() && chains(sorted[tip.index], sorted[cursor]) {
                let elevation = tip.elevation + 1;
                stack.push(Link {
                    index: cursor,
                    elevation,
                    max_elevation: elevation,
                });
                cursor += 1;
                continue;
            }

            let Some(done) = stack.pop() else { break };
            lanes[done.index] = Lane {
                elevation: done.elevation,
                max_elevation: done.max_elevation,
            };
            if let Some(parent) = stack.last_mut() {
                parent.max_elevation = parent.max_elevation.max(done.max_elevation);
            }
        }

        debug!(
            root,
            length = cursor - root,
            max_elevation = lanes[root].max_elevation,
            "consumed chain"
        );
    }

    lanes
}

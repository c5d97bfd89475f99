//! Detect time conflicts between events on the same calendar date.
//!
//! Performs pairwise comparison over the timed events of the whole list.
//! Adjacent events (where one ends exactly when another starts) are NOT conflicts.
//! All-day events never conflict, and events on different dates never interact.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};
use crate::interval::Interval;

/// A detected conflict between two events on the same date.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictPair<'a> {
    pub event_a: &'a Event,
    pub event_b: &'a Event,
    pub overlap_minutes: i64,
}

/// An event that overlaps at least one other event, with the ids it overlaps.
///
/// Serializes as the original event object plus `conflictCount` and `conflictIds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    #[serde(flatten)]
    pub event: Event,
    pub conflict_count: usize,
    pub conflict_ids: Vec<String>,
}

/// Timed events with their intervals, first occurrence of each id only.
///
/// Ids are keyed by string form, so `7` and `"7"` name the same event.
fn timed_entries(events: &[Event]) -> Vec<(&Event, Interval)> {
    let mut seen: HashSet<String> = HashSet::new();
    events
        .iter()
        .filter_map(|event| event.interval().map(|interval| (event, interval)))
        .filter(|&(event, _)| seen.insert(event.id.to_string()))
        .collect()
}

/// Index pairs `(i, j)` with `i < j` of same-date entries that overlap.
fn overlapping_pairs(entries: &[(&Event, Interval)]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for (i, (a, a_span)) in entries.iter().enumerate() {
        for (offset, (b, b_span)) in entries[i + 1..].iter().enumerate() {
            if a.date != b.date {
                continue;
            }
            if a_span.overlaps(b_span) {
                pairs.push((i, i + 1 + offset));
            }
        }
    }

    pairs
}

/// Find every pair of timed events on the same date whose intervals overlap.
///
/// Pairs are reported once, in input order (`event_a` precedes `event_b`).
pub fn find_conflicting_pairs(events: &[Event]) -> Vec<ConflictPair<'_>> {
    let entries = timed_entries(events);
    overlapping_pairs(&entries)
        .into_iter()
        .map(|(i, j)| {
            let (a, a_span) = entries[i];
            let (b, b_span) = entries[j];
            ConflictPair {
                event_a: a,
                event_b: b,
                overlap_minutes: a_span.overlap_minutes(&b_span),
            }
        })
        .collect()
}

/// Find every event that overlaps another event on its date.
///
/// Returns only conflicting events, in input order, each annotated with
/// `conflict_count` and the string form of every id it overlaps. The relation
/// is symmetric and never includes the event itself. The input is not modified,
/// so repeated calls on the same slice yield identical output.
pub fn detect_conflicts(events: &[Event]) -> Vec<ConflictRecord> {
    let entries = timed_entries(events);
    let mut conflict_ids: Vec<Vec<String>> = vec![Vec::new(); entries.len()];

    for (i, j) in overlapping_pairs(&entries) {
        conflict_ids[i].push(entries[j].0.id.to_string());
        conflict_ids[j].push(entries[i].0.id.to_string());
    }

    let records: Vec<ConflictRecord> = entries
        .into_iter()
        .zip(conflict_ids)
        .filter(|(_, ids)| !ids.is_empty())
        .map(|((event, _), ids)| ConflictRecord {
            event: event.clone(),
            conflict_count: ids.len(),
            conflict_ids: ids,
        })
        .collect();

    tracing::debug!(
        events = events.len(),
        conflicting = records.len(),
        "detected conflicts"
    );
    records
}

/// Look up the conflict record for one event, if it has any conflicts.
///
/// Ids are compared in string form, like `conflict_ids`.
pub fn conflict_for<'a>(records: &'a [ConflictRecord], id: &EventId) -> Option<&'a ConflictRecord> {
    let key = id.to_string();
    records.iter().find(|r| r.event.id.to_string() == key)
}

/// Resolve a record's `conflict_ids` back to the events they name.
///
/// Ids are compared in string form, so a numeric id `7` matches `"7"`.
pub fn conflicting_events<'a>(events: &'a [Event], record: &ConflictRecord) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| record.conflict_ids.contains(&e.id.to_string()))
        .collect()
}

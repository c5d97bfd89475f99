//! Side-by-side column layout for overlapping events in one day column.
//!
//! Each event is laid out independently against the timed events sharing its
//! date: the events it overlaps (under [`Interval::overlaps`], the same test the
//! conflict detector uses) split the column width evenly, and a [`ColumnOrder`]
//! decides which slot this event takes.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};
use crate::interval::Interval;

/// Horizontal placement of an event as fractions of its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    pub width_fraction: f64,
    pub left_offset_fraction: f64,
}

impl ColumnLayout {
    pub const FULL_WIDTH: ColumnLayout = ColumnLayout {
        width_fraction: 1.0,
        left_offset_fraction: 0.0,
    };
}

/// An event id paired with its computed column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    pub id: EventId,
    #[serde(flatten)]
    pub layout: ColumnLayout,
}

/// Decides column order among events that overlap each other.
///
/// `at_or_before(other, event)` answers whether `other` occupies a column at or
/// left of `event`'s; an event's column index is the number of overlapping
/// events for which this holds.
pub trait ColumnOrder {
    fn at_or_before(&self, other: &Event, event: &Event) -> bool;
}

/// Compares the raw `HH:MM` strings lexicographically.
///
/// Zero-padded times sort chronologically. Events sharing a start time all
/// count each other, so they land on the same column index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalTimeOrder;

impl ColumnOrder for LexicalTimeOrder {
    fn at_or_before(&self, other: &Event, event: &Event) -> bool {
        other.time <= event.time
    }
}

/// Numeric start time, ties broken by the string form of the id.
///
/// A total order: overlapping events always get distinct columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeThenIdOrder;

impl ColumnOrder for TimeThenIdOrder {
    fn at_or_before(&self, other: &Event, event: &Event) -> bool {
        let by_time = other
            .start_hours()
            .partial_cmp(&event.start_hours())
            .unwrap_or(Ordering::Equal);
        match by_time {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => other.id.to_string() < event.id.to_string(),
        }
    }
}

/// Lay out `event` against the timed events of its day using [`LexicalTimeOrder`].
pub fn layout_day(event: &Event, same_day_timed_events: &[Event]) -> ColumnLayout {
    layout_day_with(event, same_day_timed_events, &LexicalTimeOrder)
}

/// Lay out `event` with a caller-chosen column order.
///
/// Entries of `same_day_timed_events` with `event`'s id, without a usable
/// time, or on another date are ignored. An untimed `event` is full width.
pub fn layout_day_with<O: ColumnOrder + ?Sized>(
    event: &Event,
    same_day_timed_events: &[Event],
    order: &O,
) -> ColumnLayout {
    let Some(span) = event.interval() else {
        return ColumnLayout::FULL_WIDTH;
    };

    let overlapping: Vec<&Event> = same_day_timed_events
        .iter()
        .filter(|other| other.id != event.id && other.date == event.date)
        .filter(|other| {
            other
                .interval()
                .is_some_and(|other_span: Interval| other_span.overlaps(&span))
        })
        .collect();

    let total = overlapping.len() + 1;
    if total == 1 {
        return ColumnLayout::FULL_WIDTH;
    }

    let index = overlapping
        .iter()
        .filter(|other| order.at_or_before(other, event))
        .count();

    ColumnLayout {
        width_fraction: 1.0 / total as f64,
        left_offset_fraction: index as f64 / total as f64,
    }
}

/// Lay out every timed event on `date`, in input order.
pub fn layout_date(events: &[Event], date: &str) -> Vec<EventLayout> {
    layout_date_with(events, date, &LexicalTimeOrder)
}

pub fn layout_date_with<O: ColumnOrder + ?Sized>(
    events: &[Event],
    date: &str,
    order: &O,
) -> Vec<EventLayout> {
    day_column(events, date, order)
        .into_iter()
        .map(|(event, layout)| EventLayout {
            id: event.id.clone(),
            layout,
        })
        .collect()
}

/// The timed events of `date` paired with their layouts, in input order.
pub(crate) fn day_column<O: ColumnOrder + ?Sized>(
    events: &[Event],
    date: &str,
    order: &O,
) -> Vec<(Event, ColumnLayout)> {
    let day: Vec<Event> = events
        .iter()
        .filter(|e| e.date == date && e.interval().is_some())
        .cloned()
        .collect();

    tracing::trace!(date, timed = day.len(), "laying out day column");

    let layouts: Vec<ColumnLayout> = day
        .iter()
        .map(|event| layout_day_with(event, &day, order))
        .collect();
    day.into_iter().zip(layouts).collect()
}

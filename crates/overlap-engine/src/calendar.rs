//! Date arithmetic behind the month, week, day and agenda views.
//!
//! Weeks start on Sunday. Dates are `chrono::NaiveDate`; events whose `date`
//! does not parse are left out of date-range queries.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Number of days the agenda view covers by default.
pub const DEFAULT_AGENDA_DAYS: u32 = 14;

/// Month cells with more events than this collapse into a "+N more" link.
const MONTH_CELL_CAPACITY: usize = 3;

/// Events still shown in a collapsed month cell.
const MONTH_CELL_COLLAPSED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Month,
    Week,
    Day,
    Agenda,
}

/// The Sunday that starts the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// The seven days (Sunday through Saturday) of the week containing `anchor`.
pub fn week_days(anchor: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(anchor);
    let mut days = [start; 7];
    for (slot, day) in days.iter_mut().zip(start.iter_days()) {
        *slot = day;
    }
    days
}

/// Every date shown in the month grid for `anchor`'s month.
///
/// Runs from the start of the week holding the 1st to the end of the week
/// holding the last day, so the length is always a multiple of 7.
pub fn month_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let last = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .last()
        .unwrap_or(first);

    let grid_start = start_of_week(first);
    let forward = 6 - u64::from(last.weekday().num_days_from_sunday());
    let grid_end = last.checked_add_days(Days::new(forward)).unwrap_or(last);

    grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .collect()
}

/// Move the anchor date `steps` view-lengths forward (negative: backward).
///
/// Month steps clamp to the last day of shorter months. Returns `None` if the
/// result leaves chrono's representable range.
pub fn shift_view(anchor: NaiveDate, view: CalendarView, steps: i32) -> Option<NaiveDate> {
    let magnitude = steps.unsigned_abs();
    match view {
        CalendarView::Month => {
            let months = Months::new(magnitude);
            if steps >= 0 {
                anchor.checked_add_months(months)
            } else {
                anchor.checked_sub_months(months)
            }
        }
        CalendarView::Week | CalendarView::Day | CalendarView::Agenda => {
            let per_step = if view == CalendarView::Week { 7 } else { 1 };
            let days = Days::new(u64::from(magnitude) * per_step);
            if steps >= 0 {
                anchor.checked_add_days(days)
            } else {
                anchor.checked_sub_days(days)
            }
        }
    }
}

/// How many of a month cell's events to draw, and how many to fold away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCellSummary {
    pub max_to_show: usize,
    pub has_more: bool,
    pub more_count: usize,
}

pub fn month_cell_summary(event_count: usize) -> MonthCellSummary {
    if event_count > MONTH_CELL_CAPACITY {
        MonthCellSummary {
            max_to_show: MONTH_CELL_COLLAPSED,
            has_more: true,
            more_count: event_count - MONTH_CELL_COLLAPSED,
        }
    } else {
        MonthCellSummary {
            max_to_show: event_count,
            has_more: false,
            more_count: 0,
        }
    }
}

/// All events on `date`, in input order.
pub fn events_on<'a>(events: &'a [Event], date: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Timed events on `date`, in input order. This is the input a day column
/// hands to the layout engine.
pub fn timed_events_on<'a>(events: &'a [Event], date: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| e.date == date && e.start_clock().is_some())
        .collect()
}

/// One date's worth of agenda entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
}

/// Events from `start` (inclusive) through `days` days later (exclusive),
/// grouped by date in ascending order.
///
/// Within a date all-day events come first, then timed events by start time.
/// Ties keep input order.
pub fn agenda(events: &[Event], start: NaiveDate, days: u32) -> Vec<AgendaDay<'_>> {
    let end = start.checked_add_days(Days::new(u64::from(days)));

    let mut selected: Vec<(NaiveDate, &Event)> = events
        .iter()
        .filter_map(|e| e.naive_date().map(|d| (d, e)))
        .filter(|(d, _)| *d >= start && end.is_none_or(|end| *d < end))
        .collect();

    selected.sort_by_key(|(date, event)| {
        let minutes = event.start_clock().map(|(h, m)| h * 60 + m);
        (*date, minutes.is_some(), minutes)
    });

    let mut grouped: Vec<AgendaDay<'_>> = Vec::new();
    for (date, event) in selected {
        match grouped.last_mut() {
            Some(day) if day.date == date => day.events.push(event),
            _ => grouped.push(AgendaDay {
                date,
                events: vec![event],
            }),
        }
    }
    grouped
}

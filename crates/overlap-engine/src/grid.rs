//! Pixel placement of timed events on an hour grid.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};
use crate::layout::{day_column, ColumnLayout, ColumnOrder};

/// Vertical scale and horizontal gutter of the rendered day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Height of one hour row in pixels.
    pub hour_height_px: f64,
    /// Horizontal gap kept between side-by-side events.
    pub gutter_px: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_height_px: 48.0,
            gutter_px: 4.0,
        }
    }
}

/// Where an event box is drawn inside its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlacement {
    pub top_px: f64,
    pub height_px: f64,
    pub width_fraction: f64,
    pub left_offset_fraction: f64,
    pub gutter_px: f64,
}

/// A placed event, keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub id: EventId,
    #[serde(flatten)]
    pub placement: GridPlacement,
}

/// Place a timed event using its column layout. `None` for all-day events.
///
/// `top = hour * h + minute * h / 60` and `height = duration_hours * h`, where
/// `h` is the hour height; the height uses the same one-hour default as
/// conflict detection.
pub fn place_event(
    event: &Event,
    layout: ColumnLayout,
    metrics: &GridMetrics,
) -> Option<GridPlacement> {
    let (hour, minute) = event.start_clock()?;
    let h = metrics.hour_height_px;
    Some(GridPlacement {
        top_px: f64::from(hour) * h + f64::from(minute) * h / 60.0,
        height_px: event.duration_hours() * h,
        width_fraction: layout.width_fraction,
        left_offset_fraction: layout.left_offset_fraction,
        gutter_px: metrics.gutter_px,
    })
}

/// Vertical offset of the current-time indicator for `now`.
///
/// The caller supplies the clock reading.
pub fn now_indicator_offset(now: NaiveTime, metrics: &GridMetrics) -> f64 {
    let h = metrics.hour_height_px;
    f64::from(now.hour()) * h + f64::from(now.minute()) * h / 60.0
}

/// Lay out and place every timed event on `date`, in input order.
pub fn place_date<O: ColumnOrder + ?Sized>(
    events: &[Event],
    date: &str,
    metrics: &GridMetrics,
    order: &O,
) -> Vec<PlacedEvent> {
    day_column(events, date, order)
        .into_iter()
        .filter_map(|(event, layout)| {
            let placement = place_event(&event, layout, metrics)?;
            Some(PlacedEvent {
                id: event.id,
                placement,
            })
        })
        .collect()
}

//! WASM bindings for overlap-engine.
//!
//! Exposes duration parsing, conflict detection, overlap layout and the agenda
//! grouping to the browser calendar widget via `wasm-bindgen`. Events cross the
//! boundary as JSON strings in the `events.json` shape, and results come back
//! as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/overlap-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use overlap_engine::grid::{place_date, GridMetrics};
use overlap_engine::layout::LexicalTimeOrder;
use overlap_engine::{ColumnLayout, Event};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    overlap_engine::load_events(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_event_json(json: &str) -> Result<Event, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    overlap_engine::parse_date(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Convert a duration string such as `"1h30m"` into hours.
///
/// Absent, empty or unparseable input yields 1.
#[wasm_bindgen(js_name = "parseDurationHours")]
pub fn parse_duration_hours(duration: Option<String>) -> f64 {
    overlap_engine::parse_duration_hours(duration.as_deref())
}

/// Validate a user-entered duration, returning the canonical string.
///
/// Throws for input outside the `1h`, `30m`, `1h30m` family.
#[wasm_bindgen(js_name = "validateDuration")]
pub fn validate_duration(input: &str) -> Result<String, JsValue> {
    overlap_engine::validate_duration(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Find every event that overlaps another event on the same date.
///
/// `events_json` is a JSON array of events. Returns a JSON array of the
/// conflicting events, each extended with `conflictCount` and `conflictIds`.
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts(events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    to_json(&overlap_engine::detect_conflicts(&events))
}

/// Column layout for one event against the timed events sharing its date.
///
/// Returns `{"widthFraction": .., "leftOffsetFraction": ..}`.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(event_json: &str, same_day_events_json: &str) -> Result<String, JsValue> {
    let event = parse_event_json(event_json)?;
    let same_day = parse_events_json(same_day_events_json)?;
    let layout: ColumnLayout = overlap_engine::layout_day(&event, &same_day);
    to_json(&layout)
}

/// Pixel placement of every timed event on `date`.
///
/// Returns a JSON array of `{id, topPx, heightPx, widthFraction,
/// leftOffsetFraction, gutterPx}` objects. `hour_height_px` defaults to 48.
#[wasm_bindgen(js_name = "layoutDate")]
pub fn layout_date(
    events_json: &str,
    date: &str,
    hour_height_px: Option<f64>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let mut metrics = GridMetrics::default();
    if let Some(h) = hour_height_px {
        metrics.hour_height_px = h;
    }

    let placed = place_date(&events, date, &metrics, &LexicalTimeOrder);
    to_json(&placed)
}

/// Group events from `start` for `days` days (default 14) by date.
///
/// Returns a JSON array of `{date, events}` objects in date order.
#[wasm_bindgen(js_name = "agenda")]
pub fn agenda(events_json: &str, start: &str, days: Option<u32>) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let start = parse_date(start)?;
    let days = days.unwrap_or(overlap_engine::calendar::DEFAULT_AGENDA_DAYS);

    to_json(&overlap_engine::agenda(&events, start, days))
}

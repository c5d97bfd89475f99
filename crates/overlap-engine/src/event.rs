//! The calendar event record and the values derived from it.
//!
//! Events arrive in the `events.json` shape
//! `{id, date, time?, duration?, title, description?, color?, completed?}`.
//! The engine only reads them; callers own the list.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::duration::parse_duration_hours;
use crate::error::{EngineError, Result};
use crate::interval::Interval;

/// Format of [`Event::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An event identifier: a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

impl From<i32> for EventId {
    fn from(n: i32) -> Self {
        EventId::Number(i64::from(n))
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM` 24-hour. `None` for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    /// A timed event with the given start and duration and an empty title.
    pub fn timed(
        id: impl Into<EventId>,
        date: &str,
        time: &str,
        duration: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.to_string(),
            time: Some(time.to_string()),
            duration: duration.map(str::to_string),
            title: String::new(),
            description: None,
            color: None,
            completed: false,
        }
    }

    /// An all-day event on `date`.
    pub fn all_day(id: impl Into<EventId>, date: &str) -> Self {
        Self {
            id: id.into(),
            date: date.to_string(),
            time: None,
            duration: None,
            title: String::new(),
            description: None,
            color: None,
            completed: false,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn is_all_day(&self) -> bool {
        self.time.is_none()
    }

    /// Start time of day as `(hour, minute)`, or `None` if untimed or malformed.
    pub fn start_clock(&self) -> Option<(u32, u32)> {
        let raw = self.time.as_deref()?;
        let parsed = NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"));
        match parsed {
            Ok(t) => Some((t.hour(), t.minute())),
            Err(_) => {
                tracing::debug!(id = %self.id, time = raw, "unparseable event time, treating as untimed");
                None
            }
        }
    }

    /// Start in decimal hours: `hours + minutes / 60`.
    pub fn start_hours(&self) -> Option<f64> {
        self.start_clock()
            .map(|(h, m)| f64::from(h) + f64::from(m) / 60.0)
    }

    /// Duration in hours, defaulting to one hour.
    pub fn duration_hours(&self) -> f64 {
        parse_duration_hours(self.duration.as_deref())
    }

    /// The `[start, start + duration)` interval, or `None` for untimed events.
    pub fn interval(&self) -> Option<Interval> {
        self.start_hours()
            .map(|start| Interval::new(start, self.duration_hours()))
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `EngineError::InvalidDate` for any other text.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| EngineError::InvalidDate(format!("'{}': expected YYYY-MM-DD", text)))
}

/// Parse an `events.json` document (a JSON array of events).
///
/// Missing `completed` flags default to `false`.
///
/// # Errors
/// Returns `EngineError::Json` if the document is not an array of events.
pub fn load_events(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    tracing::debug!(count = events.len(), "loaded events");
    Ok(events)
}

//! # overlap-engine
//!
//! Deterministic conflict detection and overlap layout for calendar day grids.
//!
//! Given a caller-owned list of events (a date, an optional `HH:MM` start and a
//! duration string such as `"1h30m"`), the engine finds which timed events
//! overlap on the same date and how to split a day column so overlapping
//! events render side by side. Every function is pure: the event list is
//! passed in on each call and never stored or modified.
//!
//! ## Modules
//!
//! - [`duration`] — `"1h30m"` → decimal hours, with a one-hour default
//! - [`interval`] — Half-open `[start, end)` spans and the shared overlap test
//! - [`event`] — The event record and `events.json` loading
//! - [`conflict`] — Same-date pairwise conflict detection
//! - [`layout`] — Column width/offset for overlapping events
//! - [`grid`] — Pixel placement on the hour grid
//! - [`calendar`] — Week, month and agenda date arithmetic
//! - [`format`] — 12-hour time labels
//! - [`config`] — Rendering settings
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod conflict;
pub mod duration;
pub mod error;
pub mod event;
pub mod format;
pub mod grid;
pub mod interval;
pub mod layout;

pub use calendar::{agenda, month_grid, week_days, AgendaDay, CalendarView};
pub use config::EngineConfig;
pub use conflict::{detect_conflicts, find_conflicting_pairs, ConflictRecord};
pub use duration::{parse_duration_hours, validate_duration};
pub use error::EngineError;
pub use event::{load_events, parse_date, Event, EventId};
pub use interval::Interval;
pub use layout::{layout_date, layout_day, layout_day_with, ColumnLayout, ColumnOrder};

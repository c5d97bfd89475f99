//! Duration strings -- `"1h"`, `"30m"`, `"1h30m"` -- converted to decimal hours.
//!
//! Parsing is best-effort: every `<N>h` and `<N>m` token found in the string is
//! summed, and a string with no tokens falls back to one hour. The strict
//! [`validate_duration`] is only for callers building new events.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EngineError, Result};

/// Duration assumed for an event whose duration is absent or unparseable.
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// Canonical form written back when a strict input is empty.
pub const DEFAULT_DURATION: &str = "1h";

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)([hm])").unwrap());

static STRICT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+h)?([0-9]+m)?$").unwrap());

/// Parse a duration string into hours.
///
/// Sums all hour components plus all minute components divided by 60.
/// Returns [`DEFAULT_DURATION_HOURS`] for `None`, the empty string, or a string
/// containing no `<N>h`/`<N>m` token.
///
/// ```
/// use overlap_engine::parse_duration_hours;
///
/// assert_eq!(parse_duration_hours(Some("1h30m")), 1.5);
/// assert_eq!(parse_duration_hours(Some("45m")), 0.75);
/// assert_eq!(parse_duration_hours(Some("garbage")), 1.0);
/// assert_eq!(parse_duration_hours(None), 1.0);
/// ```
pub fn parse_duration_hours(duration: Option<&str>) -> f64 {
    let Some(text) = duration else {
        return DEFAULT_DURATION_HOURS;
    };

    let mut hours = 0.0;
    let mut minutes = 0.0;
    let mut matched = false;

    for caps in COMPONENT.captures_iter(text) {
        // ASCII digit runs always parse as f64; very long runs lose precision.
        let Ok(value) = caps[1].parse::<f64>() else {
            continue;
        };
        matched = true;
        match &caps[2] {
            "h" => hours += value,
            _ => minutes += value,
        }
    }

    if matched {
        hours + minutes / 60.0
    } else {
        DEFAULT_DURATION_HOURS
    }
}

/// Validate a user-entered duration against the canonical `^([0-9]+h)?([0-9]+m)?$` form.
///
/// Whitespace is trimmed. Empty input becomes [`DEFAULT_DURATION`].
///
/// # Errors
/// Returns `EngineError::InvalidDuration` for anything else, such as `"1.5h"`,
/// `"30m1h"` or `"soon"`.
pub fn validate_duration(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_DURATION.to_string());
    }
    if STRICT.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(EngineError::InvalidDuration(trimmed.to_string()))
    }
}

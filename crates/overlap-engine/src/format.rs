//! Display strings for event times.

use crate::event::Event;

/// 12-hour clock label for a timed event, e.g. `"9:05 am"` or `"12:00 pm"`.
///
/// Empty for all-day events or an unparseable `time`.
pub fn display_time(event: &Event) -> String {
    match event.start_clock() {
        Some((hour, minute)) => {
            let suffix = if hour >= 12 { "pm" } else { "am" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", hour12, minute, suffix)
        }
        None => String::new(),
    }
}

//! Half-open time intervals in decimal hours of a single calendar day.

use serde::{Deserialize, Serialize};

/// The `[start, end)` span an event occupies, in hours since midnight.
///
/// `end` is not clamped at 24.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, duration_hours: f64) -> Self {
        Self {
            start,
            end: start + duration_hours,
        }
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// This excludes the adjacent case where one ends exactly when the other
    /// starts. Conflict detection and column layout both go through here.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shared span in whole minutes, 0 when disjoint.
    pub fn overlap_minutes(&self, other: &Interval) -> i64 {
        if !self.overlaps(other) {
            return 0;
        }
        let shared = self.end.min(other.end) - self.start.max(other.start);
        (shared * 60.0).round() as i64
    }
}

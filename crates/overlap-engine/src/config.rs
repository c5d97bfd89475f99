//! Tunable rendering settings, loadable from TOML by front ends.

use serde::{Deserialize, Serialize};

use crate::calendar::DEFAULT_AGENDA_DAYS;
use crate::error::{EngineError, Result};
use crate::grid::GridMetrics;
use crate::layout::{ColumnOrder, LexicalTimeOrder, TimeThenIdOrder};

/// Which [`ColumnOrder`] to use when laying out overlapping events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOrderKind {
    /// Raw `HH:MM` string comparison.
    #[default]
    Lexical,
    /// Numeric start time, then id.
    TimeThenId,
}

impl ColumnOrderKind {
    pub fn order(self) -> &'static dyn ColumnOrder {
        match self {
            ColumnOrderKind::Lexical => &LexicalTimeOrder,
            ColumnOrderKind::TimeThenId => &TimeThenIdOrder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hour_height_px: f64,
    pub gutter_px: f64,
    pub agenda_days: u32,
    pub column_order: ColumnOrderKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let metrics = GridMetrics::default();
        Self {
            hour_height_px: metrics.hour_height_px,
            gutter_px: metrics.gutter_px,
            agenda_days: DEFAULT_AGENDA_DAYS,
            column_order: ColumnOrderKind::default(),
        }
    }
}

impl EngineConfig {
    /// Reject settings no grid can be drawn with.
    ///
    /// # Errors
    /// Returns `EngineError::Config` for a non-positive hour height, a negative
    /// gutter, or a zero-day agenda.
    pub fn validate(&self) -> Result<()> {
        if !(self.hour_height_px > 0.0) {
            return Err(EngineError::Config(format!(
                "hour_height_px must be positive, got {}",
                self.hour_height_px
            )));
        }
        if !(self.gutter_px >= 0.0) {
            return Err(EngineError::Config(format!(
                "gutter_px must not be negative, got {}",
                self.gutter_px
            )));
        }
        if self.agenda_days == 0 {
            return Err(EngineError::Config("agenda_days must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            hour_height_px: self.hour_height_px,
            gutter_px: self.gutter_px,
        }
    }
}

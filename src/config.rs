use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape of the rendered day grid: where the visible day starts, how many
/// hour rows it spans, and how many side-by-side columns overlapping
/// events may occupy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Wall-clock hour [0,23] of the first grid row. Events earlier than
    /// this wrap onto the next virtual day.
    pub day_start_hour: u32,
    /// Number of hour rows rendered.
    pub slot_count: u32,
    /// Side-by-side columns available before overflow falls back to
    /// column 0.
    pub max_columns: usize,
    /// Percentage points reserved between adjacent columns.
    pub column_gutter_percent: f32,
    /// Fixed left margin reserved for the time-axis label gutter.
    pub axis_margin_percent: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 0,
            slot_count: 24,
            max_columns: 4,
            column_gutter_percent: 2.0,
            axis_margin_percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridConfigError {
    #[error("day start hour {0} is out of range (0-23)")]
    DayStartOutOfRange(u32),
    #[error("slot count must be at least 1")]
    EmptyGrid,
    #[error("max columns must be at least 1")]
    NoColumns,
    #[error("column gutter {gutter}% leaves no room in a {lane}% lane")]
    GutterTooWide { gutter: f32, lane: f32 },
}

impl GridConfig {
    /// Strict validation for callers that want malformed windows rejected
    /// before a render pass. The layout pass itself never fails; it clamps
    /// degenerate values instead.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.day_start_hour > 23 {
            return Err(GridConfigError::DayStartOutOfRange(self.day_start_hour));
        }
        if self.slot_count == 0 {
            return Err(GridConfigError::EmptyGrid);
        }
        if self.max_columns == 0 {
            return Err(GridConfigError::NoColumns);
        }
        let lane = (100.0 - self.axis_margin_percent) / self.max_columns as f32;
        if self.column_gutter_percent >= lane {
            return Err(GridConfigError::GutterTooWide {
                gutter: self.column_gutter_percent,
                lane,
            });
        }
        Ok(())
    }
}

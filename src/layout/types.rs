use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Half-open minute range `[start, end)` on the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    /// Half-open intersection: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One event placed on the grid: minute offsets from the grid's start
/// hour, the assigned column, and render-ready percentage geometry. The
/// payload is carried through from the input event unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEvent<T = Value> {
    pub id: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub column: usize,
    pub top_percent: f32,
    pub height_percent: f32,
    pub width_percent: f32,
    pub left_percent: f32,
    #[serde(flatten)]
    pub payload: T,
}

/// One hour-high band of the rendered grid, for the time-axis gutter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    /// Wall-clock hour of the row, wrapping past midnight.
    pub hour: u32,
    /// Canonical `HH:00` axis label.
    pub label: String,
    pub top_percent: f32,
}

use super::types::{GridRow, Interval};
use crate::clock::parse_clock_time;
use crate::config::GridConfig;

/// `(top_percent, height_percent)` for an interval on the grid.
///
/// No clamping: an event running past the last row renders below the
/// visible grid and the caller's surface scrolls.
pub(super) fn vertical_extent(interval: &Interval, config: &GridConfig) -> (f32, f32) {
    let span_minutes = (config.slot_count.max(1) * 60) as f32;
    let top = interval.start as f32 / span_minutes * 100.0;
    let height = (interval.end - interval.start) as f32 / span_minutes * 100.0;
    (top, height)
}

/// `(left_percent, width_percent)` for a column.
///
/// Columns step by the full lane width; only the box width gives up the
/// gutter, so lanes stay evenly spaced.
pub(super) fn lane_geometry(column: usize, config: &GridConfig) -> (f32, f32) {
    let lane = (100.0 - config.axis_margin_percent) / config.max_columns.max(1) as f32;
    let left = config.axis_margin_percent + column as f32 * lane;
    let width = (lane - config.column_gutter_percent).max(0.0);
    (left, width)
}

/// The hour rows of the grid, for rendering the time-axis gutter: one row
/// per `slot_count` hour starting at `day_start_hour`, wrapping past
/// midnight.
pub fn grid_rows(config: &GridConfig) -> Vec<GridRow> {
    let slot_count = config.slot_count.max(1);
    (0..slot_count)
        .map(|row| {
            let hour = (config.day_start_hour + row) % 24;
            GridRow {
                hour,
                label: format!("{:02}:00", hour),
                top_percent: row as f32 / slot_count as f32 * 100.0,
            }
        })
        .collect()
}

/// Vertical position of a wall-clock instant on the grid, e.g. for a
/// current-time indicator line. The caller supplies the clock string; the
/// engine never reads a clock itself.
pub fn marker_percent(time: &str, config: &GridConfig) -> f32 {
    let minutes = parse_clock_time(time, config.day_start_hour);
    let span_minutes = (config.slot_count.max(1) * 60) as f32;
    minutes as f32 / span_minutes * 100.0
}

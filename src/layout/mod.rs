mod columns;
mod geometry;
mod overlap;
pub(crate) mod types;

pub use geometry::{grid_rows, marker_percent};
pub use types::*;

use crate::clock::parse_clock_time;
use crate::config::GridConfig;
use crate::event::DayEvent;

/// Floor for events with a missing, zero, or negative duration, so every
/// box stays visible and `end > start` always holds.
pub const MIN_EVENT_MINUTES: i32 = 10;

/// Lay out one day's events: parse start times, detect overlaps, pack
/// overlapping events into columns, attach percentage geometry.
///
/// Pure and total - no input is mutated, nothing panics, malformed fields
/// fall back deterministically (see [`parse_clock_time`] and
/// [`MIN_EVENT_MINUTES`]). Re-running on identical input yields identical
/// output, so callers may cache on input equality. Output order follows
/// input order.
pub fn compute_layout<T: Clone>(
    events: &[DayEvent<T>],
    config: &GridConfig,
) -> Vec<PositionedEvent<T>> {
    let intervals: Vec<Interval> = events
        .iter()
        .map(|event| resolve_interval(event, config))
        .collect();
    let conflicts = overlap::conflict_sets(&intervals);
    let assigned = columns::assign_columns(&intervals, &conflicts, config.max_columns);

    events
        .iter()
        .zip(intervals.iter().zip(assigned))
        .map(|(event, (interval, column))| {
            let (top_percent, height_percent) = geometry::vertical_extent(interval, config);
            let (left_percent, width_percent) = geometry::lane_geometry(column, config);
            PositionedEvent {
                id: event.id.clone(),
                start_minutes: interval.start,
                end_minutes: interval.end,
                column,
                top_percent,
                height_percent,
                width_percent,
                left_percent,
                payload: event.payload.clone(),
            }
        })
        .collect()
}

fn resolve_interval<T>(event: &DayEvent<T>, config: &GridConfig) -> Interval {
    let start = parse_clock_time(&event.time, config.day_start_hour);
    let minutes = event
        .duration_hours
        .map(|hours| (hours * 60.0).round() as i32)
        .filter(|&minutes| minutes > 0)
        .unwrap_or(MIN_EVENT_MINUTES);
    Interval {
        start,
        end: start + minutes,
    }
}

use crate::config::GridConfig;
use crate::layout::{GridRow, PositionedEvent, grid_rows};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializable snapshot of a computed day layout, for debugging and for
/// handing a whole render pass to downstream tooling in one JSON document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub day_start_hour: u32,
    pub slot_count: u32,
    pub max_columns: usize,
    pub rows: Vec<GridRow>,
    pub events: Vec<EventDump>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDump {
    pub id: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub column: usize,
    pub top_percent: f32,
    pub height_percent: f32,
    pub width_percent: f32,
    pub left_percent: f32,
}

impl LayoutDump {
    pub fn from_positioned<T>(events: &[PositionedEvent<T>], config: &GridConfig) -> Self {
        let events = events
            .iter()
            .map(|event| EventDump {
                id: event.id.clone(),
                start_minutes: event.start_minutes,
                end_minutes: event.end_minutes,
                column: event.column,
                top_percent: event.top_percent,
                height_percent: event.height_percent,
                width_percent: event.width_percent,
                left_percent: event.left_percent,
            })
            .collect();

        LayoutDump {
            day_start_hour: config.day_start_hour,
            slot_count: config.slot_count,
            max_columns: config.max_columns,
            rows: grid_rows(config),
            events,
        }
    }
}

pub fn write_layout_dump<T>(
    path: &Path,
    events: &[PositionedEvent<T>],
    config: &GridConfig,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_positioned(events, config);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

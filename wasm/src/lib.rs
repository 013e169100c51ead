use daygrid::{DayEvent, GridConfig, compute_layout, grid_rows};
use wasm_bindgen::prelude::*;

fn parse_config(config_json: Option<String>) -> Result<GridConfig, JsValue> {
    match config_json {
        Some(raw) => serde_json::from_str::<GridConfig>(&raw)
            .map_err(|error| JsValue::from_str(&error.to_string())),
        None => Ok(GridConfig::default()),
    }
}

/// Lay out one day's events. `events_json` is an array of event objects
/// (`id`, `time`, optional `durationHours`, extra fields pass through);
/// `config_json` is an optional partial grid config. Returns the
/// positioned-event array as JSON.
#[wasm_bindgen]
pub fn compute_day_layout(events_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let events: Vec<DayEvent> = serde_json::from_str(events_json)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    let config = parse_config(config_json)?;
    let layout = compute_layout(&events, &config);
    serde_json::to_string(&layout).map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Hour rows for the time-axis gutter of the configured grid, as JSON.
#[wasm_bindgen]
pub fn day_grid_rows(config_json: Option<String>) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    serde_json::to_string(&grid_rows(&config)).map_err(|error| JsValue::from_str(&error.to_string()))
}

pub mod clock;
pub mod config;
pub mod event;
pub mod layout;
pub mod layout_dump;

pub use clock::{format_clock_time, parse_clock_time};
pub use config::{GridConfig, GridConfigError};
pub use event::DayEvent;
pub use layout::{GridRow, PositionedEvent, compute_layout, grid_rows, marker_percent};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scheduled item on a single day's calendar, as handed over by the
/// booking layer.
///
/// `time` stays textual (`"14:30"` or `"2:30 pm"`) because that is what the
/// backend stores; parsing happens inside the layout pass. The `payload`
/// carries whatever display fields the caller attaches (title, assignee,
/// customer reference) and is passed through untouched. On the JSON
/// boundary the payload is flattened, so extra fields live next to the
/// known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEvent<T = Value> {
    pub id: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f32>,
    #[serde(flatten)]
    pub payload: T,
}

impl DayEvent<Value> {
    pub fn new(id: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            duration_hours: None,
            payload: serde_json::json!({}),
        }
    }
}

impl<T> DayEvent<T> {
    pub fn with_duration(mut self, hours: f32) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    /// Swap the passthrough payload, keeping id/time/duration.
    pub fn with_payload<U>(self, payload: U) -> DayEvent<U> {
        DayEvent {
            id: self.id,
            time: self.time,
            duration_hours: self.duration_hours,
            payload,
        }
    }
}

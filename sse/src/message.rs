use axum::response::sse::Event as AxumEvent;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Payload of the acknowledgment sent once when a stream opens.
pub const WELCOME_MESSAGE: &str = "MCP Server Connected";

/// Trait for getting the SSE event type name
pub trait EventType {
    fn event_type(&self) -> &'static str;
}

/// Events pushed down an open stream.
///
/// Serialized untagged so the `data:` line carries only the payload object,
/// e.g. `{"message":"MCP Server Connected"}` or `{"heartbeat":"2025-01-01T00:00:00.000Z"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Event {
    Connected { message: String },
    Heartbeat { heartbeat: String },
}

impl Event {
    pub fn connected() -> Self {
        Event::Connected {
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    /// A heartbeat stamped with `at` as ISO-8601 UTC, millisecond precision.
    pub fn heartbeat_at(at: DateTime<Utc>) -> Self {
        Event::Heartbeat {
            heartbeat: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn heartbeat_now() -> Self {
        Self::heartbeat_at(Utc::now())
    }

    /// Frames the event for the wire: a single `data:` field, no event name or id.
    pub fn to_sse_event(&self) -> Result<AxumEvent, serde_json::Error> {
        let data = serde_json::to_string(self)?;
        Ok(AxumEvent::default().data(data))
    }
}

impl EventType for Event {
    fn event_type(&self) -> &'static str {
        match self {
            Event::Connected { .. } => "connected",
            Event::Heartbeat { .. } => "heartbeat",
        }
    }
}

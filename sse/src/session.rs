use crate::connection::{ConnectionId, ConnectionRegistry};
use crate::manager::MAX_HEARTBEAT_PERIOD;
use crate::message::{Event, EventType};
use async_stream::stream;
use axum::response::sse::Event as AxumEvent;
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Heartbeat timer is armed and events are being emitted.
    Open,
    /// Terminal. The timer has been released and the session unregistered.
    Closed,
}

/// Per-connection stream state: one welcome event, then a heartbeat per period.
///
/// The session owns its timer. Dropping the session (which is what happens
/// when the client goes away and the response body is dropped) closes it.
pub struct Session {
    connection_id: ConnectionId,
    registry: Arc<ConnectionRegistry>,
    heartbeat: Option<Interval>,
    welcomed: bool,
}

impl Session {
    pub(crate) fn open(registry: Arc<ConnectionRegistry>, period: Duration) -> Self {
        let connection_id = registry.register();
        let period = period.min(MAX_HEARTBEAT_PERIOD);

        // First heartbeat is due one full period after the welcome event.
        let now = Instant::now();
        let first_tick = now.checked_add(period).unwrap_or(now);
        let mut heartbeat = interval_at(first_tick, period);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            connection_id,
            registry,
            heartbeat: Some(heartbeat),
            welcomed: false,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn state(&self) -> SessionState {
        if self.heartbeat.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    /// Waits for the next event of this session. Returns `None` once closed.
    pub async fn next_event(&mut self) -> Option<Event> {
        let heartbeat = self.heartbeat.as_mut()?;

        let event = if !self.welcomed {
            self.welcomed = true;
            Event::connected()
        } else {
            heartbeat.tick().await;
            Event::heartbeat_now()
        };

        trace!(
            "SSE session {} emitting {} event",
            self.connection_id.as_str(),
            event.event_type()
        );
        Some(event)
    }

    /// Open -> Closed. Releases the timer and unregisters the session; idempotent.
    pub fn close(&mut self) {
        if self.heartbeat.take().is_some() {
            self.registry.unregister(&self.connection_id);
            info!("SSE session {} closed", self.connection_id.as_str());
        }
    }

    /// Turns the session into the response body stream of an SSE connection.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<AxumEvent, Infallible>> {
        stream! {
            while let Some(event) = self.next_event().await {
                match event.to_sse_event() {
                    Ok(sse_event) => yield Ok(sse_event),
                    Err(e) => error!("Failed to serialize SSE event: {e}"),
                }
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

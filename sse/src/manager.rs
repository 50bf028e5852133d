use crate::connection::ConnectionRegistry;
use crate::session::Session;
use log::*;
use std::sync::Arc;
use std::time::Duration;

/// Period between heartbeats when none is configured.
pub const DEFAULT_HEARTBEAT_PERIOD: Duration = Duration::from_secs(10);

/// Longest accepted heartbeat period, in seconds (one day).
pub const MAX_HEARTBEAT_SECS: u64 = 86_400;

/// Longest accepted heartbeat period. Longer periods are clamped to it.
pub const MAX_HEARTBEAT_PERIOD: Duration = Duration::from_secs(MAX_HEARTBEAT_SECS);

pub struct Manager {
    registry: Arc<ConnectionRegistry>,
    heartbeat_period: Duration,
}

impl Manager {
    pub fn new(heartbeat_period: Duration) -> Self {
        if heartbeat_period > MAX_HEARTBEAT_PERIOD {
            warn!(
                "Heartbeat period {heartbeat_period:?} exceeds the maximum, using {MAX_HEARTBEAT_PERIOD:?}"
            );
        }
        let heartbeat_period = heartbeat_period.min(MAX_HEARTBEAT_PERIOD);

        Self {
            registry: Arc::new(ConnectionRegistry::new()),
            heartbeat_period,
        }
    }

    /// Opens and registers a new stream session with its own heartbeat timer
    pub fn open_session(&self) -> Session {
        let session = Session::open(Arc::clone(&self.registry), self.heartbeat_period);
        info!(
            "Opened SSE session {} ({} active)",
            session.id().as_str(),
            self.registry.len()
        );
        session
    }

    pub fn active_connections(&self) -> usize {
        self.registry.len()
    }

    pub fn heartbeat_period(&self) -> Duration {
        self.heartbeat_period
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(DEFAULT_HEARTBEAT_PERIOD)
    }
}

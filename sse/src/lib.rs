//! Server-Sent Events (SSE) stream sessions.
//!
//! Every client that opens the event stream gets its own [`session::Session`]:
//! one welcome event as soon as the stream opens, then a heartbeat event per
//! period until the client disconnects. Sessions do not share state with each
//! other; the [`Manager`] only keeps a registry of which ones are open.
//!
//! # Wire format
//!
//! Each event is a single `data:` line holding a JSON object, followed by a
//! blank line:
//!
//! ```text
//! data: {"message":"MCP Server Connected"}
//!
//! data: {"heartbeat":"2025-03-14T15:09:36.000Z"}
//! ```
//!
//! # Lifecycle
//!
//! A session is Open from registration until the client goes away. When the
//! HTTP transport notices the disconnect it drops the response body stream,
//! which drops the session, which releases its timer and unregisters it.
//!
//! # Modules
//!
//! - `connection`: ConnectionRegistry and the server-generated ConnectionId
//! - `manager`: opens sessions with the configured heartbeat period
//! - `message`: the event payloads and their SSE framing
//! - `session`: the per-connection Open/Closed state machine

pub mod connection;
pub mod manager;
pub mod message;
pub mod session;

pub use manager::{Manager, MAX_HEARTBEAT_SECS};
pub use session::{Session, SessionState};

//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the event stream endpoint.
//! Session state and event framing live in the `sse` crate.

pub mod handler;

//! Query dispatch for the MCP query endpoint.
//!
//! Re-exports the collection entities from `entity_api` so that consumers of the `domain`
//! crate do not need to depend on `entity_api` directly.
pub use entity_api::{users, Id};

pub mod error;
pub mod query;
pub mod user;

pub use query::Query;

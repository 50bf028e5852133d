// Testing Tools Library
//
// Integration testing utilities for a running MCP server.
// Currently includes:
// - sse-test-client: checks the event stream and the query endpoint end to end

pub mod api_client;
pub mod output;
pub mod scenarios;
pub mod sse_client;

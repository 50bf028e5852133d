use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::Stream;
use log::*;
use service::AppState;
use std::convert::Infallible;

/// GET a long-lived event stream.
///
/// Sends `{"message":"MCP Server Connected"}` right away, then a
/// `{"heartbeat":"<ISO-8601>"}` event every heartbeat period until the client
/// disconnects. The session and its timer are released when the transport
/// drops the response body.
#[utoipa::path(
    get,
    path = "/mcp/sse",
    responses(
        (status = 200, description = "Open event stream of welcome and heartbeat events", content_type = "text/event-stream", body = String),
    )
)]
pub(crate) async fn sse_handler(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session = app_state.sse_manager.open_session();
    debug!(
        "Establishing SSE connection {} (heartbeat every {:?})",
        session.id().as_str(),
        app_state.sse_manager.heartbeat_period()
    );

    Sse::new(session.into_stream())
}

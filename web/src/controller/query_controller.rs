use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::params::query::QueryParams;
use crate::{AppState, Error};
use domain::Query;
use log::*;

/// POST run one of the recognized queries against the document store.
///
/// `get_user_data` answers with every document of the `users` collection,
/// as stored. Any other (or missing) query name is rejected before the store
/// is touched.
#[utoipa::path(
    post,
    path = "/mcp/query",
    request_body = QueryParams,
    responses(
        (status = 200, description = "Successfully ran the query; get_user_data returns a JSON array of user documents", content_type = "application/json"),
        (status = 400, description = "Unknown query"),
        (status = 500, description = "Internal Server Error"),
        (status = 503, description = "Document store is not connected")
    )
)]
pub async fn query(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let params = QueryParams::from_body(&body);
    debug!("POST query: {:?}", params.query_name());

    let query = Query::from_name(params.query_name())?;
    let result = query.execute(app_state.storage_ref()).await?;

    Ok(Json(result))
}

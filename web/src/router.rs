use crate::{
    controller::{health_check_controller, query_controller},
    sse, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "MCP Server API"
        ),
        paths(
            health_check_controller::health_check,
            query_controller::query,
            sse::handler::sse_handler,
        ),
        components(
            schemas(
                crate::params::query::QueryParams,
            )
        ),
        tags(
            (name = "mcp_server", description = "MCP event stream and document query API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(mcp_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn mcp_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/mcp/sse", get(sse::handler::sse_handler))
        .route("/mcp/query", post(query_controller::query))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

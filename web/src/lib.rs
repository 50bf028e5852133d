use axum::http::{header, HeaderValue, Method};
use log::*;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod params;
mod router;
mod sse;

/// Binds the configured interface and port and serves the MCP routes until the process ends.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );
    let cors = cors_layer(&app_state.config.allowed_origins);

    let app = router::define_routes(app_state).layer(cors);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("MCP Server listening at http://{listen_addr}");

    axum::serve(listener, app).await
}

// With no configured origins any origin is allowed, otherwise only the listed ones.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::CACHE_CONTROL]);

    if allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app(allowed_origins: &[String]) -> Router {
        Router::new()
            .route("/health", get(|| async { "healthy" }))
            .layer(cors_layer(allowed_origins))
    }

    fn request_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn any_origin_is_allowed_when_none_are_configured() {
        let response = app(&[]).oneshot(request_from("http://anywhere.test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn only_configured_origins_are_echoed() {
        let allowed = vec!["http://localhost:5173".to_string()];

        let allowed_response = app(&allowed)
            .oneshot(request_from("http://localhost:5173"))
            .await
            .unwrap();
        assert_eq!(
            allowed_response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );

        let other_response = app(&allowed)
            .oneshot(request_from("http://elsewhere.test"))
            .await
            .unwrap();
        assert!(other_response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

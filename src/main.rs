use log::{error, info};
use service::{config::Config, logging::Logger, AppState, Storage};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    info!(
        "Starting MCP server [{}] in {} mode",
        env!("CARGO_PKG_VERSION"),
        config.runtime_env()
    );

    // The listener comes up right away; queries answer 503 until the store is connected.
    let storage = Arc::new(Storage::new());
    {
        let config = config.clone();
        let storage = Arc::clone(&storage);
        tokio::spawn(async move {
            // A failure has already been logged; the server keeps running without storage.
            let _ = service::connect_storage(&config, &storage).await;
        });
    }

    let app_state = AppState::new(config, &storage);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use terminal_server::gds::{GdsClient, GdsConfig};
use terminal_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the GDS credential from the environment. The server still
    // starts without it; /schedules then fails with a configuration
    // error instead of calling upstream.
    let gds = match std::env::var("KUPOS_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let config = GdsConfig::new(key);
            Some(GdsClient::new(config).expect("Failed to create GDS client"))
        }
        _ => {
            tracing::warn!("KUPOS_API_KEY not set; /schedules will return an error");
            None
        }
    };

    let state = AppState::new(gds);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Terminal schedule server listening on http://{addr}");
    tracing::info!("API Endpoints:");
    tracing::info!("  GET /health        - Health check");
    tracing::info!("  GET /schedules     - Aggregated carrier departure board");
    tracing::info!("  GET /destinations  - Destination catalog");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

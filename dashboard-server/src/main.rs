use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use dashboard_server::cache::{CacheConfig, CachedDataClient};
use dashboard_server::config::ServerConfig;
use dashboard_server::data::{DataClient, HeadwaySource, MockDataClient};
use dashboard_server::stations::ReferenceTables;
use dashboard_server::web::{AppState, create_router};

/// Log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "dashboard_server=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load station tables (fail fast if unreadable)
    let tables = match &config.stations_path {
        Some(path) => ReferenceTables::load(path).expect("Failed to load station tables"),
        None => ReferenceTables::bundled().expect("Bundled station tables are invalid"),
    };

    // Pick the headway source: fixtures if configured, otherwise the live API
    let headways = match &config.mock_data {
        Some(dir) => {
            let mock = MockDataClient::new(dir).expect("Failed to load mock headways");
            info!(
                dir = %dir.display(),
                stops = mock.available_stops().await.len(),
                "serving mock headways"
            );
            HeadwaySource::Mock(mock)
        }
        None => {
            info!(
                api = %config.data.base_url,
                timeout_secs = config.data.timeout_secs,
                max_concurrent = config.data.max_concurrent,
                "using live data API"
            );
            let client =
                DataClient::new(config.data.clone()).expect("Failed to create data client");
            HeadwaySource::Live(Arc::new(CachedDataClient::new(
                client,
                &CacheConfig::default(),
            )))
        }
    };

    let state = AppState::new(tables, headways);
    let app = create_router(state, &config.static_dir);

    let addr = config.addr;
    info!("Transit dashboard listening on http://{addr}");
    info!("  GET  /health                     - Health check");
    info!("  GET  /{{line}}[/{{page}}]            - Line dashboard");
    info!("  GET  /{{line}}/{{page}}/date         - Date picker navigation");
    info!("  GET  /api/lines                  - Line list");
    info!("  GET  /api/{{line}}/stations        - Ordered stations");
    info!("  GET  /api/{{line}}/headways        - Headways widget data");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

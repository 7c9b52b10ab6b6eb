use axum::Router;
use scappata::config::Config;
use scappata::datasets::{FileDatasetStore, PlaceSource};
use scappata::services::itinerary::HubMatcher;
use scappata::services::suggest::SuggestEngine;
use scappata::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scappata=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Scappata API server");
    tracing::info!(data_dir = %config.data_dir.display(), "Configuration loaded successfully");

    if !config.data_dir.is_dir() {
        tracing::warn!(
            data_dir = %config.data_dir.display(),
            "Data directory not found; requests will fail until the datasets are deployed"
        );
    }

    // Initialize services
    let datasets: Arc<dyn PlaceSource> = Arc::new(FileDatasetStore::new(
        config.data_dir.clone(),
        config.dataset_cache_ttl,
    ));
    let engine = SuggestEngine::new(config.scoring.clone());
    let hub_matcher = HubMatcher::new(config.scoring.clone());

    // Create application state
    let state = Arc::new(AppState {
        datasets,
        engine,
        hub_matcher,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", scappata::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::synthesizers::Synthesizer;

/// Build the application router. Shared between the server binary and the
/// test harness.
pub fn build_router(synthesizer: Arc<dyn Synthesizer>, tts_controller: Arc<TtsController>) -> Router {
    // Read-only endpoints
    let info_routes = Router::new()
        .route("/health", get(health::health))
        .route("/voices", get(health::voices))
        .with_state(synthesizer);

    // Synthesis endpoints
    let tts_routes = Router::new()
        .route("/synthesize", post(TtsController::synthesize))
        .route("/synthesize-batch", post(TtsController::synthesize_batch))
        .with_state(tts_controller);

    Router::new()
        .merge(info_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // The service is called from backend origins we do not control;
        // restrict in production deployments.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    synthesizer: Arc<dyn Synthesizer>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(synthesizer, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

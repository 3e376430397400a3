// HTTP routes configuration

use super::handlers::{
    health_handler, languages_handler, metrics_handler, ocr_handler, translate_handler,
};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::error::Result;
use crate::google::GoogleClient;
use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub google_client: Arc<GoogleClient>,
}

pub fn create_router(config: AppConfig, google_client: GoogleClient) -> Result<Router> {
    // Oversized files must reach the OCR validator to get a JSON 413
    let upload_limit = config.server.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    let translate_limit = config.server.max_translate_body_bytes;
    let static_files = ServeDir::new(&config.server.static_dir);

    let state = AppState {
        config: Arc::new(config),
        google_client: Arc::new(google_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/api/languages", get(languages_handler))
        .route(
            "/api/translate",
            post(translate_handler).layer(DefaultBodyLimit::max(translate_limit)),
        )
        .route(
            "/api/ocr",
            post(ocr_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        // `/` serves index.html from the static directory
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extraction::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {uri} not found"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_file_size + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(handlers::handle_api_info))
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/stats", get(handlers::handle_stats))
        .route("/api/parse-resume", post(handlers::handle_parse_resume))
        .route("/api/extract", post(handlers::handle_extract))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

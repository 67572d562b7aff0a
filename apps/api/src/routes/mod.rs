pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Allow some slack over the document cap for the multipart framing and
    // the job description part; the precise cap is enforced in the extractor.
    let body_limit = state.config.max_upload_bytes + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scan", post(handlers::handle_scan))
        .route("/api/v1/scan/text", post(handlers::handle_scan_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

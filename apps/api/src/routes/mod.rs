pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::rewrite::handlers::{handle_rewrite, MAX_UPLOAD_BYTES};
use crate::search::handlers::{handle_search, handle_stats};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job search
        .route("/api/v1/jobs/search", get(handle_search))
        .route("/api/v1/jobs/stats", get(handle_stats))
        // Resume rewrite
        .route(
            "/api/v1/resume/rewrite",
            post(handle_rewrite).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/api/v1/interview/start", post(handlers::handle_start))
        .route(
            "/api/v1/interview/upload-resume",
            post(handlers::handle_upload_resume),
        )
        .route("/api/v1/interview/respond", post(handlers::handle_respond))
        .route("/api/v1/interview/:session_id", delete(handlers::handle_end))
        .route(
            "/api/v1/interview/:session_id/summary",
            get(handlers::handle_get_summary),
        )
        .with_state(state)
}

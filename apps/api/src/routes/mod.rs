pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::diff::handlers as diff_handlers;
use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::handlers as suggestion_handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Diff API
        .route("/api/v1/diff", post(diff_handlers::handle_diff))
        .route("/api/v1/diff/bullets", post(diff_handlers::handle_diff_bullets))
        // Suggestion API
        .route(
            "/api/v1/suggestions",
            post(suggestion_handlers::handle_suggest),
        )
        .route(
            "/api/v1/suggestions/bullets",
            post(suggestion_handlers::handle_suggest_bullets),
        )
        .fallback(not_found)
        .with_state(state)
}

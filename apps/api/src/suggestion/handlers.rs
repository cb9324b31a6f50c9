//! Axum route handlers for the Suggestion API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::models::{BulletRewriteRequest, RewriteRequest};
use crate::suggestion::service::{
    suggest_bullets, suggest_text, BulletSuggestionResponse, SuggestionResponse,
};

/// POST /api/v1/suggestions
///
/// Rewrites one block of résumé text and returns the word-level diff.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let response = suggest_text(state.rewriter.as_ref(), &state.config, request).await?;
    Ok(Json(response))
}

/// POST /api/v1/suggestions/bullets
///
/// Rewrites a bullet list and returns a per-bullet diff.
pub async fn handle_suggest_bullets(
    State(state): State<AppState>,
    Json(request): Json<BulletRewriteRequest>,
) -> Result<Json<BulletSuggestionResponse>, AppError> {
    let response = suggest_bullets(state.rewriter.as_ref(), &state.config, request).await?;
    Ok(Json(response))
}

//! Axum route handlers for the Diff API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::bullets::{diff_bullets, BulletDiff};
use crate::diff::engine::{compute_diff, DiffSpan, DiffSummary};
use crate::diff::view::{render_html, render_segments, Segment, ViewMode};
use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::{check_bullets, check_text_len};

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub original: String,
    pub modified: String,
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Also return the segments rendered as inline HTML.
    #[serde(default)]
    pub include_html: bool,
}

#[derive(Debug, Serialize)]
pub struct DiffResponse {
    pub spans: Vec<DiffSpan>,
    pub segments: Vec<Segment>,
    pub summary: DiffSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulletDiffRequest {
    #[serde(default)]
    pub original: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulletDiffResponse {
    pub bullets: Vec<BulletDiff>,
    pub summary: DiffSummary,
}

/// POST /api/v1/diff
pub async fn handle_diff(
    State(state): State<AppState>,
    Json(request): Json<DiffRequest>,
) -> Result<Json<DiffResponse>, AppError> {
    check_text_len("original", &request.original, &state.config)?;
    check_text_len("modified", &request.modified, &state.config)?;

    let spans = compute_diff(&request.original, &request.modified);
    let segments = render_segments(
        &request.original,
        &request.modified,
        &spans,
        request.view_mode,
    );
    let summary = DiffSummary::from_spans(&spans);
    let html = request.include_html.then(|| render_html(&segments));
    debug!("Diff computed: {} spans, view={:?}", spans.len(), request.view_mode);

    Ok(Json(DiffResponse {
        spans,
        segments,
        summary,
        html,
    }))
}

/// POST /api/v1/diff/bullets
pub async fn handle_diff_bullets(
    State(state): State<AppState>,
    Json(request): Json<BulletDiffRequest>,
) -> Result<Json<BulletDiffResponse>, AppError> {
    check_bullets("original", &request.original, &state.config)?;
    check_bullets("modified", &request.modified, &state.config)?;

    let bullets = diff_bullets(&request.original, &request.modified);
    let summary = bullets
        .iter()
        .map(|b| DiffSummary::from_spans(&b.spans))
        .fold(DiffSummary::default(), DiffSummary::merge);
    debug!("Bullet diff computed: {} items", bullets.len());

    Ok(Json(BulletDiffResponse { bullets, summary }))
}

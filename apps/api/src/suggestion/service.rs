//! Suggestion pipeline: validates a rewrite request, calls the rewriter,
//! and diffs the result against the original.
//!
//! Flow: validate → rewrite → normalize → compute_diff / diff_bullets.
//! A rewriter failure short-circuits before the differ is ever invoked.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::diff::{compute_diff, diff_bullets, BulletDiff, DiffSpan, DiffSummary};
use crate::errors::AppError;
use crate::suggestion::models::{
    BulletRewriteRequest, JobContext, RewriteAction, RewriteRequest, SectionType,
};
use crate::suggestion::rewriter::TextRewriter;
use crate::validation::{check_bullets, check_text_len};

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub suggestion_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub section_type: SectionType,
    pub action: RewriteAction,
    pub original: String,
    pub modified: String,
    pub spans: Vec<DiffSpan>,
    pub summary: DiffSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletSuggestionResponse {
    pub suggestion_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub section_type: SectionType,
    pub action: RewriteAction,
    pub original: Vec<String>,
    pub modified: Vec<String>,
    pub bullets: Vec<BulletDiff>,
    pub summary: DiffSummary,
}

/// Rewrites one block of text and returns the before/after diff.
pub async fn suggest_text(
    rewriter: &dyn TextRewriter,
    config: &Config,
    request: RewriteRequest,
) -> Result<SuggestionResponse, AppError> {
    if request.current_content.trim().is_empty() {
        return Err(AppError::Validation(
            "current_content cannot be empty".to_string(),
        ));
    }
    check_text_len("current_content", &request.current_content, config)?;
    check_job_context(request.action, request.job_context.as_ref())?;

    let rewritten = rewriter.rewrite(&request).await?;
    let modified = rewritten.trim().to_string();
    if modified.is_empty() {
        return Err(AppError::Llm(
            "rewrite service returned empty content".to_string(),
        ));
    }

    let spans = compute_diff(&request.current_content, &modified);
    let summary = DiffSummary::from_spans(&spans);
    info!(
        "{:?} suggestion for {:?}: +{} / -{} words",
        request.action, request.section_type, summary.added_words, summary.removed_words
    );

    Ok(SuggestionResponse {
        suggestion_id: Uuid::new_v4(),
        created_at: Utc::now(),
        section_type: request.section_type,
        action: request.action,
        original: request.current_content,
        modified,
        spans,
        summary,
    })
}

/// Rewrites a bullet list and returns a per-bullet diff.
pub async fn suggest_bullets(
    rewriter: &dyn TextRewriter,
    config: &Config,
    request: BulletRewriteRequest,
) -> Result<BulletSuggestionResponse, AppError> {
    if request.bullets.iter().all(|b| b.trim().is_empty()) {
        return Err(AppError::Validation(
            "bullets must contain at least one non-empty item".to_string(),
        ));
    }
    check_bullets("bullets", &request.bullets, config)?;
    check_job_context(request.action, request.job_context.as_ref())?;

    let rewritten = rewriter.rewrite_bullets(&request).await?;
    let modified: Vec<String> = rewritten.iter().map(|b| b.trim().to_string()).collect();
    if modified.iter().all(String::is_empty) {
        return Err(AppError::Llm(
            "rewrite service returned no bullets".to_string(),
        ));
    }
    if modified.len() > request.bullets.len() {
        warn!(
            "Rewrite returned {} bullets for {} inputs",
            modified.len(),
            request.bullets.len()
        );
    }

    let bullets = diff_bullets(&request.bullets, &modified);
    let summary = bullets
        .iter()
        .map(|b| DiffSummary::from_spans(&b.spans))
        .fold(DiffSummary::default(), DiffSummary::merge);
    info!(
        "{:?} bullet suggestion: {} bullets, +{} / -{} words",
        request.action,
        bullets.len(),
        summary.added_words,
        summary.removed_words
    );

    Ok(BulletSuggestionResponse {
        suggestion_id: Uuid::new_v4(),
        created_at: Utc::now(),
        section_type: request.section_type,
        action: request.action,
        original: request.bullets,
        modified,
        bullets,
        summary,
    })
}

fn check_job_context(
    action: RewriteAction,
    job_context: Option<&JobContext>,
) -> Result<(), AppError> {
    if action == RewriteAction::Tailor && job_context.map_or(true, JobContext::is_empty) {
        return Err(AppError::Validation(
            "job_context is required for the tailor action".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::diff::bullets::BulletStatus;
    use crate::diff::engine::DiffKind;
    use crate::validation::test_config;

    struct FixedRewriter {
        text: String,
        bullets: Vec<String>,
        calls: AtomicUsize,
    }

    impl FixedRewriter {
        fn new(text: &str, bullets: &[&str]) -> Self {
            Self {
                text: text.to_string(),
                bullets: bullets.iter().map(|b| b.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextRewriter for FixedRewriter {
        async fn rewrite(&self, _request: &RewriteRequest) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }

        async fn rewrite_bullets(
            &self,
            _request: &BulletRewriteRequest,
        ) -> Result<Vec<String>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.bullets.clone())
        }
    }

    struct FailingRewriter;

    #[async_trait]
    impl TextRewriter for FailingRewriter {
        async fn rewrite(&self, _request: &RewriteRequest) -> Result<String, AppError> {
            Err(AppError::Llm("upstream unavailable".to_string()))
        }

        async fn rewrite_bullets(
            &self,
            _request: &BulletRewriteRequest,
        ) -> Result<Vec<String>, AppError> {
            Err(AppError::Llm("upstream unavailable".to_string()))
        }
    }

    fn text_request(content: &str, action: RewriteAction) -> RewriteRequest {
        RewriteRequest {
            current_content: content.to_string(),
            section_type: SectionType::Summary,
            job_context: None,
            action,
        }
    }

    fn bullet_request(bullets: &[&str]) -> BulletRewriteRequest {
        BulletRewriteRequest {
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            section_type: SectionType::Experience,
            job_context: None,
            action: RewriteAction::Improve,
        }
    }

    #[tokio::test]
    async fn test_suggest_text_diffs_trimmed_rewrite() {
        let rewriter = FixedRewriter::new("  the slow fox\n", &[]);
        let response = suggest_text(
            &rewriter,
            &test_config(),
            text_request("the quick fox", RewriteAction::Improve),
        )
        .await
        .unwrap();

        assert_eq!(response.modified, "the slow fox");
        assert_eq!(
            response.spans,
            vec![
                DiffSpan::unchanged("the "),
                DiffSpan::removed("quick"),
                DiffSpan::added("slow"),
                DiffSpan::unchanged(" fox"),
            ]
        );
        assert!(response.summary.has_changes);
    }

    #[tokio::test]
    async fn test_empty_content_is_rejected_before_rewrite() {
        let rewriter = FixedRewriter::new("anything", &[]);
        let err = suggest_text(&rewriter, &test_config(), text_request("   ", RewriteAction::Improve))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tailor_requires_job_context() {
        let rewriter = FixedRewriter::new("anything", &[]);
        let err = suggest_text(&rewriter, &test_config(), text_request("Built APIs", RewriteAction::Tailor))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("job_context")));
    }

    #[tokio::test]
    async fn test_tailor_with_job_context_succeeds() {
        let rewriter = FixedRewriter::new("Built Rust APIs", &[]);
        let mut request = text_request("Built APIs", RewriteAction::Tailor);
        request.job_context = Some(JobContext {
            title: Some("Rust Engineer".into()),
            ..Default::default()
        });
        let response = suggest_text(&rewriter, &test_config(), request).await.unwrap();
        assert_eq!(response.modified, "Built Rust APIs");
    }

    #[tokio::test]
    async fn test_rewriter_failure_short_circuits() {
        let err = suggest_text(
            &FailingRewriter,
            &test_config(),
            text_request("Built APIs", RewriteAction::Improve),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_blank_rewrite_is_an_llm_error() {
        let rewriter = FixedRewriter::new(" \n ", &[]);
        let err = suggest_text(&rewriter, &test_config(), text_request("Built APIs", RewriteAction::Improve))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_unchanged_rewrite_reports_no_changes() {
        let rewriter = FixedRewriter::new("Built APIs", &[]);
        let response = suggest_text(
            &rewriter,
            &test_config(),
            text_request("Built APIs", RewriteAction::FixGrammar),
        )
        .await
        .unwrap();
        assert_eq!(response.spans, vec![DiffSpan::unchanged("Built APIs")]);
        assert!(!response.summary.has_changes);
    }

    #[tokio::test]
    async fn test_suggest_bullets_marks_dropped_bullet_removed() {
        let rewriter = FixedRewriter::new("", &["Led a team of 6"]);
        let response = suggest_bullets(
            &rewriter,
            &test_config(),
            bullet_request(&["Led a team of 4", "Wrote docs"]),
        )
        .await
        .unwrap();

        assert_eq!(response.bullets.len(), 2);
        assert_eq!(response.bullets[0].status, BulletStatus::Modified);
        assert_eq!(response.bullets[1].status, BulletStatus::Removed);
        assert_eq!(response.bullets[1].spans[0].kind, DiffKind::Removed);
        assert_eq!(response.summary.removed_words, 3);
        assert_eq!(response.summary.added_words, 1);
    }

    #[tokio::test]
    async fn test_suggest_bullets_rejects_all_blank_input() {
        let rewriter = FixedRewriter::new("", &["x"]);
        let err = suggest_bullets(&rewriter, &test_config(), bullet_request(&["", "  "]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_suggest_bullets_rejects_empty_rewrite() {
        let rewriter = FixedRewriter::new("", &[]);
        let err = suggest_bullets(&rewriter, &test_config(), bullet_request(&["Wrote docs"]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}

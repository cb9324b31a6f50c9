//! Text rewriter: pluggable, trait-based access to the AI rewrite service.
//!
//! Default: `LlmRewriter`, which goes through the shared `LlmClient`.
//! `AppState` holds an `Arc<dyn TextRewriter>` so tests can swap in a fake.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION, TEXT_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::suggestion::models::{
    BulletRewriteRequest, JobContext, RewriteAction, RewriteRequest, SectionType,
};
use crate::suggestion::prompts::{
    BULLETS_PROMPT_TEMPLATE, BULLETS_ROLE, REWRITE_PROMPT_TEMPLATE, REWRITE_ROLE,
};

/// Opaque text-in / text-out rewrite service.
#[async_trait]
pub trait TextRewriter: Send + Sync {
    /// Returns the replacement for `request.current_content`.
    async fn rewrite(&self, request: &RewriteRequest) -> Result<String, AppError>;

    /// Returns the replacement bullet list, in order.
    async fn rewrite_bullets(&self, request: &BulletRewriteRequest)
        -> Result<Vec<String>, AppError>;
}

/// Rewriter backed by Claude.
#[derive(Clone)]
pub struct LlmRewriter {
    llm: LlmClient,
}

impl LlmRewriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[derive(Debug, Deserialize)]
struct RewrittenBullets {
    bullets: Vec<String>,
}

#[async_trait]
impl TextRewriter for LlmRewriter {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<String, AppError> {
        let prompt = build_prompt(
            REWRITE_PROMPT_TEMPLATE,
            request.section_type,
            request.action,
            request.job_context.as_ref(),
            &request.current_content,
        );
        let system = format!("{REWRITE_ROLE} {TEXT_ONLY_SYSTEM}");
        debug!(
            "Requesting {:?} rewrite for {:?} ({} chars)",
            request.action,
            request.section_type,
            request.current_content.chars().count()
        );
        Ok(self.llm.call_text(&prompt, &system).await?)
    }

    async fn rewrite_bullets(
        &self,
        request: &BulletRewriteRequest,
    ) -> Result<Vec<String>, AppError> {
        let prompt = build_prompt(
            BULLETS_PROMPT_TEMPLATE,
            request.section_type,
            request.action,
            request.job_context.as_ref(),
            &number_bullets(&request.bullets),
        );
        let system = format!("{BULLETS_ROLE} {JSON_ONLY_SYSTEM}");
        debug!(
            "Requesting {:?} rewrite of {} bullets",
            request.action,
            request.bullets.len()
        );
        let response: RewrittenBullets = self.llm.call_json(&prompt, &system).await?;
        Ok(response.bullets)
    }
}

fn build_prompt(
    template: &str,
    section: SectionType,
    action: RewriteAction,
    job_context: Option<&JobContext>,
    content: &str,
) -> String {
    template
        .replace("{section}", section.label())
        .replace("{instruction}", action.instruction())
        .replace("{job_context}", &describe_job(job_context))
        .replace("{rules}", NO_FABRICATION_INSTRUCTION)
        .replace("{content}", content)
}

fn describe_job(job_context: Option<&JobContext>) -> String {
    let Some(ctx) = job_context.filter(|c| !c.is_empty()) else {
        return "Target job: not specified.".to_string();
    };

    let mut lines = vec!["Target job:".to_string()];
    let fields = [
        ("Title", &ctx.title),
        ("Company", &ctx.company),
        ("Description", &ctx.description),
    ];
    for (label, value) in fields {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            lines.push(format!("- {label}: {value}"));
        }
    }
    lines.join("\n")
}

fn number_bullets(bullets: &[String]) -> String {
    bullets
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{}. {}", i + 1, b))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_prompt(
            REWRITE_PROMPT_TEMPLATE,
            SectionType::Summary,
            RewriteAction::Shorten,
            None,
            "Engineer with 8 years of experience.",
        );
        assert!(prompt.contains("professional summary"));
        assert!(prompt.contains("noticeably shorter"));
        assert!(prompt.contains("Target job: not specified."));
        assert!(prompt.contains("Do NOT invent"));
        assert!(prompt.contains("Engineer with 8 years of experience."));
        for placeholder in ["{section}", "{instruction}", "{job_context}", "{rules}", "{content}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_job_description_skips_blank_fields() {
        let ctx = JobContext {
            title: Some("Platform Engineer".into()),
            company: Some("   ".into()),
            description: None,
        };
        let text = describe_job(Some(&ctx));
        assert_eq!(text, "Target job:\n- Title: Platform Engineer");
    }

    #[test]
    fn test_empty_job_context_treated_as_unspecified() {
        let text = describe_job(Some(&JobContext::default()));
        assert_eq!(text, "Target job: not specified.");
    }

    #[test]
    fn test_bullets_are_numbered_in_order() {
        let bullets = vec!["Shipped billing v2".to_string(), "Cut p99 by 40%".to_string()];
        assert_eq!(
            number_bullets(&bullets),
            "1. Shipped billing v2\n2. Cut p99 by 40%"
        );
    }

    #[test]
    fn test_bullet_prompt_keeps_json_schema_braces() {
        let prompt = build_prompt(
            BULLETS_PROMPT_TEMPLATE,
            SectionType::Experience,
            RewriteAction::Improve,
            None,
            "1. Did things",
        );
        assert!(prompt.contains(r#"{"bullets": ["#));
        assert!(prompt.contains("1. Did things"));
    }
}

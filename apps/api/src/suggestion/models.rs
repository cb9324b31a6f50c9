use serde::{Deserialize, Serialize};

/// The résumé section the text belongs to. Steers phrasing in the rewrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Achievements,
    CoverLetter,
    Custom,
}

impl SectionType {
    pub fn label(self) -> &'static str {
        match self {
            SectionType::Summary => "professional summary",
            SectionType::Experience => "work experience entry",
            SectionType::Education => "education entry",
            SectionType::Skills => "skills section",
            SectionType::Projects => "project description",
            SectionType::Achievements => "achievements list",
            SectionType::CoverLetter => "cover letter paragraph",
            SectionType::Custom => "résumé section",
        }
    }
}

/// What the user asked the assistant to do with the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteAction {
    Improve,
    Shorten,
    Expand,
    /// Align wording with the target job. Requires a job context.
    Tailor,
    FixGrammar,
}

impl RewriteAction {
    pub fn instruction(self) -> &'static str {
        match self {
            RewriteAction::Improve => {
                "Improve clarity and impact. Prefer strong action verbs and concrete outcomes."
            }
            RewriteAction::Shorten => {
                "Make it noticeably shorter while keeping the most important information."
            }
            RewriteAction::Expand => {
                "Expand it with more detail drawn only from what the text already implies."
            }
            RewriteAction::Tailor => {
                "Adjust the wording to match the target job's language and priorities."
            }
            RewriteAction::FixGrammar => {
                "Fix grammar, spelling, and punctuation only. Change as little as possible."
            }
        }
    }
}

/// Target job the rewrite should be tuned for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl JobContext {
    /// True when no field carries any non-blank text.
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.company, &self.description]
            .iter()
            .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Request to rewrite a single block of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub current_content: String,
    pub section_type: SectionType,
    #[serde(default)]
    pub job_context: Option<JobContext>,
    pub action: RewriteAction,
}

/// Request to rewrite a list of bullets in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletRewriteRequest {
    pub bullets: Vec<String>,
    pub section_type: SectionType,
    #[serde(default)]
    pub job_context: Option<JobContext>,
    pub action: RewriteAction,
}

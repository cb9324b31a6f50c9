// Prompt constants for the Suggestion module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role line for single-text rewrites. Combined with `TEXT_ONLY_SYSTEM`.
pub const REWRITE_ROLE: &str = "You are an expert résumé editor. \
    You rewrite a single piece of résumé text as instructed.";

/// Single-text rewrite template.
/// Replace `{section}`, `{instruction}`, `{job_context}`, `{rules}` and `{content}`.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite the following {section}.

Instruction: {instruction}

{job_context}

{rules}

Original text:
<<<
{content}
>>>"#;

/// Role line for bullet-list rewrites. Combined with `JSON_ONLY_SYSTEM`.
pub const BULLETS_ROLE: &str = "You are an expert résumé editor. \
    You rewrite lists of résumé bullets as instructed.";

/// Bullet rewrite template. Replace the same placeholders as the text template,
/// with `{content}` holding the numbered bullet list.
pub const BULLETS_PROMPT_TEMPLATE: &str = r#"Rewrite each bullet of the following {section}.

Instruction: {instruction}

{job_context}

{rules}

Return a JSON object with this EXACT schema:
{"bullets": ["rewritten bullet 1", "rewritten bullet 2"]}

Keep the bullets in the same order. Return one entry per input bullet unless the
instruction is to shorten, in which case you may drop the weakest bullets.

Bullets:
{content}"#;

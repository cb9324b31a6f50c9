// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment that enforces bare-text output.
pub const TEXT_ONLY_SYSTEM: &str = "Respond with the rewritten text only. \
    Do NOT add a preamble, quotes, labels, markdown, or commentary.";

/// Appended to every rewrite prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Keep every fact from the original text. Do NOT invent employers, \
    dates, metrics, titles, technologies, or achievements that are not present. \
    If a number is not in the original, do not add one.";

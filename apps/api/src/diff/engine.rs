//! Word-level diff engine: aligns an original and a modified text into
//! unchanged / added / removed spans.
//!
//! The alignment is a greedy two-cursor walk with a bounded lookahead on
//! mismatch. It is NOT a minimal edit script: small edits (one word
//! inserted, deleted or replaced) resolve cleanly, while heavily repeated
//! words may align against a nearer occurrence than an LCS diff would pick.
//! Suggestion UIs are tuned against this output, so keep the heuristic.
//!
//! Pure and stateless: no caching, no logging. Callers memoize if needed.

use serde::{Deserialize, Serialize};

use crate::diff::tokenizer::{token_kind, tokenize, TokenKind};

/// How many tokens past the cursor are scanned for a realignment point.
pub const LOOKAHEAD_WINDOW: usize = 4;

/// Change classification of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

/// A contiguous run of tokens sharing one change kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    pub kind: DiffKind,
    pub value: String,
}

impl DiffSpan {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            value: value.into(),
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Added,
            value: value.into(),
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Removed,
            value: value.into(),
        }
    }
}

/// Word counts per change kind. Whitespace tokens are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub unchanged_words: usize,
    pub added_words: usize,
    pub removed_words: usize,
    /// True when any token, whitespace included, was added or removed.
    pub has_changes: bool,
}

impl DiffSummary {
    pub fn from_spans(spans: &[DiffSpan]) -> Self {
        let mut summary = Self::default();
        for span in spans {
            let words = tokenize(&span.value)
                .into_iter()
                .filter(|t| token_kind(t) == TokenKind::Word)
                .count();
            match span.kind {
                DiffKind::Unchanged => summary.unchanged_words += words,
                DiffKind::Added => {
                    summary.added_words += words;
                    summary.has_changes |= !span.value.is_empty();
                }
                DiffKind::Removed => {
                    summary.removed_words += words;
                    summary.has_changes |= !span.value.is_empty();
                }
            }
        }
        summary
    }

    /// Adds two summaries, e.g. across the bullets of one list.
    pub fn merge(self, other: Self) -> Self {
        Self {
            unchanged_words: self.unchanged_words + other.unchanged_words,
            added_words: self.added_words + other.added_words,
            removed_words: self.removed_words + other.removed_words,
            has_changes: self.has_changes || other.has_changes,
        }
    }
}

/// Returns the first index in `from .. from + max_window` whose token equals
/// `target`. The window is clamped to the end of `tokens`.
pub fn find_ahead(tokens: &[&str], from: usize, max_window: usize, target: &str) -> Option<usize> {
    let end = from.saturating_add(max_window).min(tokens.len());
    (from..end).find(|&k| tokens[k] == target)
}

/// Computes the word-level diff between `original` and `modified`.
///
/// Identical inputs (both empty included) short-circuit to a single
/// unchanged span holding the whole text.
pub fn compute_diff(original: &str, modified: &str) -> Vec<DiffSpan> {
    if original == modified {
        return vec![DiffSpan::unchanged(modified)];
    }

    let old_tokens = tokenize(original);
    let new_tokens = tokenize(modified);
    let mut builder = SpanBuilder::default();

    let (mut i, mut j) = (0, 0);
    while i < old_tokens.len() || j < new_tokens.len() {
        if i >= old_tokens.len() {
            for token in &new_tokens[j..] {
                builder.push(DiffKind::Added, token);
            }
            j = new_tokens.len();
        } else if j >= new_tokens.len() {
            for token in &old_tokens[i..] {
                builder.push(DiffKind::Removed, token);
            }
            i = old_tokens.len();
        } else if old_tokens[i] == new_tokens[j] {
            builder.push(DiffKind::Unchanged, old_tokens[i]);
            i += 1;
            j += 1;
        } else if let Some(k) = find_ahead(&old_tokens, i + 1, LOOKAHEAD_WINDOW, new_tokens[j]) {
            for token in &old_tokens[i..k] {
                builder.push(DiffKind::Removed, token);
            }
            i = k;
        } else if let Some(k) = find_ahead(&new_tokens, j + 1, LOOKAHEAD_WINDOW, old_tokens[i]) {
            for token in &new_tokens[j..k] {
                builder.push(DiffKind::Added, token);
            }
            j = k;
        } else {
            builder.push(DiffKind::Removed, old_tokens[i]);
            builder.push(DiffKind::Added, new_tokens[j]);
            i += 1;
            j += 1;
        }
    }

    let spans = builder.finish();
    debug_assert_eq!(reconstruct_original(&spans), original);
    debug_assert_eq!(reconstruct_modified(&spans), modified);
    spans
}

/// Reassembles the original text from `unchanged` and `removed` spans.
pub fn reconstruct_original(spans: &[DiffSpan]) -> String {
    collect_kinds(spans, DiffKind::Removed)
}

/// Reassembles the modified text from `unchanged` and `added` spans.
pub fn reconstruct_modified(spans: &[DiffSpan]) -> String {
    collect_kinds(spans, DiffKind::Added)
}

fn collect_kinds(spans: &[DiffSpan], side: DiffKind) -> String {
    spans
        .iter()
        .filter(|s| s.kind == DiffKind::Unchanged || s.kind == side)
        .map(|s| s.value.as_str())
        .collect()
}

/// Coalesces consecutive tokens of the same kind into one span.
#[derive(Debug, Default)]
struct SpanBuilder {
    spans: Vec<DiffSpan>,
}

impl SpanBuilder {
    fn push(&mut self, kind: DiffKind, token: &str) {
        match self.spans.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(token),
            _ => self.spans.push(DiffSpan {
                kind,
                value: token.to_string(),
            }),
        }
    }

    fn finish(self) -> Vec<DiffSpan> {
        self.spans
    }
}

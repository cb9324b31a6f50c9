//! Presentation mapping from diff spans to styled segments.
//!
//! This is a display filter only. Spans are borrowed and never mutated, and
//! the `original` / `modified` modes bypass the diff entirely.

use serde::{Deserialize, Serialize};

use crate::diff::engine::{DiffKind, DiffSpan};

/// Which side(s) of a suggestion the caller wants to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Diff,
    Original,
    Modified,
}

/// Visual treatment of a rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStyle {
    Plain,
    /// Struck-through text that exists only in the original.
    Deleted,
    /// Highlighted text that exists only in the modified version.
    Inserted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub style: SegmentStyle,
    pub text: String,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            style: SegmentStyle::Plain,
            text: text.to_string(),
        }
    }
}

impl From<&DiffSpan> for Segment {
    fn from(span: &DiffSpan) -> Self {
        let style = match span.kind {
            DiffKind::Unchanged => SegmentStyle::Plain,
            DiffKind::Removed => SegmentStyle::Deleted,
            DiffKind::Added => SegmentStyle::Inserted,
        };
        Self {
            style,
            text: span.value.clone(),
        }
    }
}

/// Maps a computed diff to display segments for the given view mode.
pub fn render_segments(
    original: &str,
    modified: &str,
    spans: &[DiffSpan],
    mode: ViewMode,
) -> Vec<Segment> {
    match mode {
        ViewMode::Diff => spans.iter().map(Segment::from).collect(),
        ViewMode::Original => vec![Segment::plain(original)],
        ViewMode::Modified => vec![Segment::plain(modified)],
    }
}

/// Renders segments as inline HTML using `<del>` and `<ins>`.
/// Segment text is escaped; input text is never interpreted as markup.
pub fn render_html(segments: &[Segment]) -> String {
    let mut html = String::new();
    for segment in segments {
        let text = escape_html(&segment.text);
        match segment.style {
            SegmentStyle::Plain => html.push_str(&text),
            SegmentStyle::Deleted => {
                html.push_str("<del>");
                html.push_str(&text);
                html.push_str("</del>");
            }
            SegmentStyle::Inserted => {
                html.push_str("<ins>");
                html.push_str(&text);
                html.push_str("</ins>");
            }
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compute_diff;

    #[test]
    fn test_diff_mode_maps_every_span() {
        let spans = compute_diff("the quick fox", "the slow fox");
        let segments = render_segments("the quick fox", "the slow fox", &spans, ViewMode::Diff);
        let styles: Vec<_> = segments.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                SegmentStyle::Plain,
                SegmentStyle::Deleted,
                SegmentStyle::Inserted,
                SegmentStyle::Plain
            ]
        );
        assert_eq!(segments[1].text, "quick");
        assert_eq!(segments[2].text, "slow");
    }

    #[test]
    fn test_original_and_modified_modes_show_raw_text() {
        let spans = compute_diff("old text", "new text");
        assert_eq!(
            render_segments("old text", "new text", &spans, ViewMode::Original),
            vec![Segment::plain("old text")]
        );
        assert_eq!(
            render_segments("old text", "new text", &spans, ViewMode::Modified),
            vec![Segment::plain("new text")]
        );
    }

    #[test]
    fn test_rendering_leaves_spans_untouched() {
        let spans = compute_diff("a b", "a c");
        let before = spans.clone();
        let _ = render_segments("a b", "a c", &spans, ViewMode::Diff);
        assert_eq!(spans, before);
    }

    #[test]
    fn test_html_wraps_changes_and_escapes() {
        let spans = compute_diff("use <b>", "use <i> & more");
        let segments = render_segments("use <b>", "use <i> & more", &spans, ViewMode::Diff);
        let html = render_html(&segments);
        assert!(html.starts_with("use "));
        assert!(html.contains("<del>&lt;b&gt;</del>"));
        assert!(html.contains("<ins>&lt;i&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_view_mode_defaults_to_diff() {
        assert_eq!(ViewMode::default(), ViewMode::Diff);
        let mode: ViewMode = serde_json::from_str("\"modified\"").unwrap();
        assert_eq!(mode, ViewMode::Modified);
    }
}

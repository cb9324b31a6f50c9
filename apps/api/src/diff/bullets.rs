//! Bullet-level diff: applies the word differ per list item.
//!
//! Items are paired by index; the shorter list is padded with empty strings.
//! A bullet that only exists on one side is reported whole instead of being
//! token-diffed.

use serde::{Deserialize, Serialize};

use crate::diff::engine::{compute_diff, DiffKind, DiffSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletStatus {
    Unchanged,
    Modified,
    /// Wholly new bullet.
    Added,
    /// Bullet deleted in the modified list.
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletDiff {
    /// Zero-based position shared by both lists.
    pub index: usize,
    pub status: BulletStatus,
    pub spans: Vec<DiffSpan>,
}

/// Diffs two ordered bullet lists item by item.
pub fn diff_bullets<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<BulletDiff> {
    let len = original.len().max(modified.len());
    (0..len)
        .map(|index| {
            let old = original.get(index).map_or("", |s| s.as_ref());
            let new = modified.get(index).map_or("", |s| s.as_ref());
            diff_bullet(index, old, new)
        })
        .collect()
}

fn diff_bullet(index: usize, original: &str, modified: &str) -> BulletDiff {
    let (status, spans) = if original.is_empty() && !modified.is_empty() {
        (BulletStatus::Added, vec![DiffSpan::added(modified)])
    } else if modified.is_empty() && !original.is_empty() {
        (BulletStatus::Removed, vec![DiffSpan::removed(original)])
    } else {
        let spans = compute_diff(original, modified);
        let status = if spans.iter().all(|s| s.kind == DiffKind::Unchanged) {
            BulletStatus::Unchanged
        } else {
            BulletStatus::Modified
        };
        (status, spans)
    };

    BulletDiff {
        index,
        status,
        spans,
    }
}

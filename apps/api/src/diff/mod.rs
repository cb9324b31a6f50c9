// Word-level text diff for before/after suggestion comparisons.
// Pure and synchronous: the engine, bullet wrapper and view mapping do no I/O
// and hold no state between calls. Only handlers.rs touches AppState.

pub mod bullets;
pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod view;

pub use bullets::{diff_bullets, BulletDiff};
pub use engine::{compute_diff, DiffSpan, DiffSummary};

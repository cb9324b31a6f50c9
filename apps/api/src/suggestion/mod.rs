// AI rewrite suggestions.
// The rewrite service is reached only through the TextRewriter trait; every
// rewrite is diffed against its original before it is returned.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod rewriter;
pub mod service;

pub use rewriter::{LlmRewriter, TextRewriter};

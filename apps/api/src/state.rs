use std::sync::Arc;

use crate::config::Config;
use crate::suggestion::TextRewriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable rewrite backend. Default: LlmRewriter.
    pub rewriter: Arc<dyn TextRewriter>,
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote completion backend. `DisabledProvider` when no API key is configured.
    pub llm: Arc<dyn CompletionProvider>,
}

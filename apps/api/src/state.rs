use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::search::client::SearchBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Job search backend. Default: AdzunaClient.
    pub search: Arc<dyn SearchBackend>,
    /// `None` when ANTHROPIC_API_KEY is unset; the rewrite route then answers 503.
    pub llm: Option<LlmClient>,
}

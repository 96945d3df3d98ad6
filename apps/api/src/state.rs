use crate::config::Config;
use crate::editor::session::SessionStore;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory editor sessions. Documents and styles live only as long
    /// as the process — no persistence layer.
    pub sessions: SessionStore,
    pub llm: LlmClient,
    /// Kept for handlers that need runtime configuration later.
    #[allow(dead_code)]
    pub config: Config,
}

use std::sync::Arc;

use crate::interview::store::SessionStore;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The collaborator behind every question, judgment, scoring, and
    /// summary call. Trait object so tests can swap in scripted backends.
    pub llm: Arc<dyn LanguageModel>,
    /// In-memory session registry; a process restart drops all interviews.
    pub sessions: SessionStore,
}

use std::sync::Arc;

use goalchat_llm::chat::ChatCompletion;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn ChatCompletion>,
}

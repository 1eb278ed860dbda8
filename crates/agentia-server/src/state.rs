//! Application State

use std::sync::Arc;

use agentia_core::{GenerationOptions, TextGenerator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Hosted text-generation backend, built once at start-up
    pub generator: Arc<dyn TextGenerator>,

    /// Budget applied to every proxied prompt
    pub generation: GenerationOptions,
}

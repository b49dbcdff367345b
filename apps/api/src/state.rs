use std::sync::Arc;

use crate::config::Config;
use crate::nlp::Annotator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable annotator. Default: `SpacyClient`; tests inject fixed documents.
    pub annotator: Arc<dyn Annotator>,
}

use std::sync::Arc;

use crate::classifier::PlacementClassifier;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated while serving.
#[derive(Clone)]
pub struct AppState {
    /// Loaded before the listener binds. Default: the JSON artifact classifier.
    pub classifier: Arc<dyn PlacementClassifier>,
    pub config: Config,
}

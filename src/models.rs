use std::sync::Arc;

use crate::config::Config;
use crate::storage::ObjectStore;

/// Shared state handed to every route handler. The store client is built once
/// at startup and injected; handlers never construct their own.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ObjectStore>,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub storage: String,
}

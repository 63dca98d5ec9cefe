use std::sync::Arc;

use eventdesk_validator::FormCatalog;

use crate::config::ApiConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything lives behind `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    /// Form declarations served to clients.
    pub catalog: Arc<FormCatalog>,
}

impl AppState {
    pub fn new(config: ApiConfig, catalog: FormCatalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}

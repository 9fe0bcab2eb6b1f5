//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current route catalog, swappable on reload
    pub catalog: CatalogStore,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: CatalogStore, config: PlannerConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

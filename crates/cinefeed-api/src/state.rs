//! Shared application state.

use cinefeed_catalog::application::service::CatalogService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog service facade.
    pub catalog: CatalogService,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

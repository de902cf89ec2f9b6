//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::view::{DetailPageLinks, ViewRegistry};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog client and the mounted view registry.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: CatalogClient,
    views: ViewRegistry,
    links: DetailPageLinks,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let views = ViewRegistry::new(config.view_idle_timeout);

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                views,
                links: DetailPageLinks,
            }),
        }
    }

    /// Get a reference to the catalog service client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the mounted view registry.
    #[must_use]
    pub fn views(&self) -> &ViewRegistry {
        &self.inner.views
    }

    /// Get the product link builder.
    #[must_use]
    pub fn links(&self) -> &DetailPageLinks {
        &self.inner.links
    }
}

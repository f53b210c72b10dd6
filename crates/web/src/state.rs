//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::MarketConfig;
use crate::providers::mock::{MockCatalog, MockIdentity};
use crate::providers::{CatalogProvider, IdentityProvider};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the two external providers. Providers are held
/// behind trait objects so the mock implementations can be swapped for
/// real ones without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    identity: Arc<dyn IdentityProvider>,
    catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    /// Create application state with the mock providers.
    #[must_use]
    pub fn new(config: MarketConfig) -> Self {
        Self::with_providers(
            config,
            Arc::new(MockIdentity::new()),
            Arc::new(MockCatalog::new()),
        )
    }

    /// Create application state with explicit providers.
    #[must_use]
    pub fn with_providers(
        config: MarketConfig,
        identity: Arc<dyn IdentityProvider>,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                identity,
                catalog,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get a reference to the Identity Provider.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.inner.identity.as_ref()
    }

    /// Get a reference to the Catalog Provider.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }
}

use std::sync::Arc;

use codeious_site_core::content::ContentResolver;
use codeious_site_core::events::EventBus;
use codeious_site_core::store::Cms;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    cms: Cms,
    resolver: ContentResolver,
    config: AppConfig,
    event_bus: EventBus,
}

impl AppState {
    /// `cms` should already publish on `event_bus`.
    pub fn new(cms: Cms, config: AppConfig, event_bus: EventBus) -> Self {
        let resolver = ContentResolver::new(cms.clone()).with_timeout(config.store_timeout());
        Self {
            inner: Arc::new(InnerState {
                cms,
                resolver,
                config,
                event_bus,
            }),
        }
    }

    pub fn cms(&self) -> &Cms {
        &self.inner.cms
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.inner.resolver
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.event_bus
    }
}

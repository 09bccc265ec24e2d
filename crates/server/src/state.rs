//! Application state for the web server.

use core_types::{Catalog, MailDelivery};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Projects listed on the dashboard.
    pub catalog: Arc<Catalog>,
    /// Backend handed drafts from `POST /api/mail`.
    pub delivery: Arc<dyn MailDelivery + Send + Sync>,
    /// Directory holding the built frontend.
    pub dist: Arc<PathBuf>,
}

impl AppState {
    /// Create app state handing mail drafts to `delivery`.
    pub fn new(
        catalog: Catalog,
        delivery: impl MailDelivery + Send + Sync + 'static,
        dist: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            delivery: Arc::new(delivery),
            dist: Arc::new(dist.into()),
        }
    }

    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }

    pub fn dist(&self) -> &Path {
        &self.dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{FailoverDelivery, Unconfigured, catalog};

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(catalog::builtin().clone(), Unconfigured, "dist");

        assert_eq!(state.catalog.len(), 1);
        assert!(state.catalog.get("email-sender").is_some());
        assert!(state.catalog.get("nonexistent").is_none());
        assert_eq!(state.index_html(), PathBuf::from("dist/index.html"));
        assert_eq!(state.delivery.provider().name, "unconfigured");
    }

    #[test]
    fn test_failover_delivery() {
        let state = AppState::new(catalog::builtin().clone(), FailoverDelivery::new(), "dist");

        assert_eq!(state.delivery.provider().name, "failover");
    }
}

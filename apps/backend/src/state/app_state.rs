use std::fmt;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::badges::BadgeCatalog;
use crate::realtime::Notifier;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Badge catalog, loaded once at startup
    pub catalog: Arc<BadgeCatalog>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        catalog: Arc<BadgeCatalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            db: Some(db),
            catalog,
            notifier,
        }
    }

    pub fn without_db(catalog: Arc<BadgeCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db: None,
            catalog,
            notifier,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("badges", &self.catalog.badges().len())
            .finish()
    }
}

use std::sync::Arc;

use crate::config::db::DbProfile;
use crate::domain::badges::BadgeCatalog;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::realtime::{ChannelHub, Notifier};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    catalog: Option<BadgeCatalog>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            catalog: None,
            notifier: None,
        }
    }
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }
    pub fn with_catalog(mut self, catalog: BadgeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let catalog = Arc::new(self.catalog.unwrap_or_default());
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(ChannelHub::new()) as Arc<dyn Notifier>);

        if let Some(profile) = self.db_profile {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(profile).await?;
            Ok(AppState::new(conn, catalog, notifier))
        } else {
            Ok(AppState::without_db(catalog, notifier))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod realtime;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::badges::load_catalog;
pub use config::db::{db_url, DbProfile};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use extractors::current_user::CurrentUser;
pub use extractors::game_id::GameId;
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::request_trace::RequestTrace;
pub use realtime::{ChannelHub, Notifier, ServerEvent};
pub use services::{BadgeService, GameStateService, GuessService, ProgressionService};
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::db::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::infra::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! `GET /health`: process liveness plus the state of the progression store.

use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    badges: usize,
    checked_at: String,
}

/// Outcome of the store check. `migrations` is "unknown" whenever the store
/// could not be queried.
struct StoreCheck {
    reachable: bool,
    error: Option<String>,
    migrations: String,
}

impl StoreCheck {
    fn failed(error: String) -> Self {
        Self {
            reachable: false,
            error: Some(error),
            migrations: "unknown".into(),
        }
    }
}

async fn check_store(db: &DatabaseConnection) -> StoreCheck {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    if let Err(e) = db.query_one(ping).await {
        return StoreCheck::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".into(),
        Err(_) => "unknown".into(),
    };
    StoreCheck {
        reachable: true,
        error: None,
        migrations,
    }
}

/// Always answers 200 while the process is up; `db` reports the store.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let store = match require_db(&app_state) {
        Ok(db) => check_store(db).await,
        Err(e) => StoreCheck::failed(format!("DB unavailable: {e}")),
    };

    HttpResponse::Ok().json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db: if store.reachable { "ok" } else { "error" },
        db_error: store.error,
        migrations: store.migrations,
        badges: app_state.catalog.badges().len(),
        checked_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".into()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

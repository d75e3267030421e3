use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Get database engine name for logging
fn db_engine(profile: &DbProfile) -> &'static str {
    match profile {
        DbProfile::Prod => "postgresql",
        DbProfile::InMemory | DbProfile::SqliteFile { .. } => "sqlite",
    }
}

fn connect_options(profile: &DbProfile, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10));
    match profile {
        // Every pooled connection to `sqlite::memory:` is its own database.
        DbProfile::InMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbProfile::SqliteFile { .. } => {
            opts.max_connections(4);
        }
        DbProfile::Prod => {
            opts.max_connections(16).min_connections(1);
        }
    }
    opts
}

/// Connects without running migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let conn = Database::connect(connect_options(profile, url)).await?;
    Ok(conn)
}

/// Single entrypoint used by `StateBuilder`: connect, then migrate up.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let engine = db_engine(&profile);
    info!(engine, "Connecting to database");

    let conn = connect_db(&profile).await?;

    migrate(&conn, MigrationCommand::Up).await.map_err(|e| {
        warn!(engine, error = %e, "Migration failed");
        AppError::from(e)
    })?;

    info!(
        engine,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Database ready"
    );
    Ok(conn)
}

use std::env;

use crate::error::AppError;

/// Database profile for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Postgres, URL assembled from `POSTGRES_*` variables
    Prod,
    /// Private SQLite in-memory database (tests, local runs)
    InMemory,
    /// SQLite file at the given path, created if missing
    SqliteFile { path: String },
}

impl DbProfile {
    /// Profile selected by `ABOUTME_DB` (`postgres` | `memory` | `sqlite:<path>`).
    /// Defaults to `Prod`.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = env::var("ABOUTME_DB").unwrap_or_else(|_| "postgres".to_string());
        match raw.as_str() {
            "postgres" => Ok(DbProfile::Prod),
            "memory" => Ok(DbProfile::InMemory),
            other => match other.strip_prefix("sqlite:") {
                Some(path) if !path.is_empty() => Ok(DbProfile::SqliteFile {
                    path: path.to_string(),
                }),
                _ => Err(AppError::config(format!(
                    "ABOUTME_DB must be 'postgres', 'memory' or 'sqlite:<path>', got '{other}'"
                ))),
            },
        }
    }

    pub fn is_sqlite(&self) -> bool {
        !matches!(self, DbProfile::Prod)
    }
}

/// Builds a database URL for the profile
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let host = host();
            let port = port();
            let db_name = must_var("POSTGRES_DB")?;
            let username = must_var("POSTGRES_USER")?;
            let password = must_var("POSTGRES_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { path } => Ok(format!("sqlite:{path}?mode=rwc")),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

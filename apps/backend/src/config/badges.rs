//! Badge catalog loading.
//!
//! The catalog is read once at startup and passed to the services through
//! `AppState`; nothing re-reads it afterwards.

use std::env;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::badges::{Badge, BadgeCatalog};
use crate::error::AppError;

pub const BADGES_FILE_VAR: &str = "ABOUTME_BADGES_FILE";

/// Load the catalog from `ABOUTME_BADGES_FILE` when set, otherwise the built-in list.
pub fn load_catalog() -> Result<BadgeCatalog, AppError> {
    match env::var(BADGES_FILE_VAR) {
        Ok(path) if !path.trim().is_empty() => load_catalog_file(Path::new(&path)),
        _ => {
            info!("Using built-in badge catalog");
            Ok(BadgeCatalog::default())
        }
    }
}

/// Parse a JSON array of `{ "id", "name", "pointsRequired" }` objects.
pub fn load_catalog_file(path: &Path) -> Result<BadgeCatalog, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!(
            "failed to read badge catalog {}: {e}",
            path.display()
        ))
    })?;
    let catalog = parse_catalog(&raw)?;
    info!(
        path = %path.display(),
        badges = catalog.badges().len(),
        "Loaded badge catalog"
    );
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> Result<BadgeCatalog, AppError> {
    let badges: Vec<Badge> = serde_json::from_str(raw)
        .map_err(|e| AppError::config(format!("invalid badge catalog: {e}")))?;
    BadgeCatalog::new(badges).map_err(|e| AppError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    #[test]
    fn parses_and_sorts() {
        let catalog = parse_catalog(
            r#"[
                {"id": "oracle", "name": "Oracle", "pointsRequired": 200},
                {"id": "warming_up", "name": "Warming Up", "pointsRequired": 0}
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = catalog.badges().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["warming_up", "oracle"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_catalog("{not json").unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn rejects_invalid_catalog() {
        let err = parse_catalog(
            r#"[{"id": "warming_up", "name": "Warming Up", "pointsRequired": 5}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("warming_up"));
    }

    #[test]
    #[serial]
    fn env_var_unset_uses_default() {
        env::remove_var(BADGES_FILE_VAR);
        assert_eq!(load_catalog().unwrap(), BadgeCatalog::default());
    }

    #[test]
    #[serial]
    fn env_var_points_at_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "curious", "name": "Curious", "pointsRequired": 15}}]"#
        )
        .unwrap();
        env::set_var(BADGES_FILE_VAR, file.path());
        let catalog = load_catalog().unwrap();
        env::remove_var(BADGES_FILE_VAR);

        assert_eq!(catalog.badges().len(), 1);
        assert_eq!(catalog.get("curious").unwrap().points_required, 15);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_catalog_file(Path::new("/nonexistent/badges.json")).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}

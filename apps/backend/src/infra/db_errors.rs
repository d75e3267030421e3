//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here so services only
//! ever see `DomainError`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique-violation message (SQLite `table.column` list or Postgres
/// index name) to a domain conflict.
fn unique_violation_to_conflict(msg: &str) -> (ConflictKind, &'static str) {
    if msg.contains("ux_awarded_badges_user_game_badge") || msg.contains("awarded_badges.") {
        return (ConflictKind::BadgeAlreadyOwned, "Badge already owned");
    }
    if msg.contains("ux_answers_game_question_user_about") || msg.contains("answers.") {
        return (
            ConflictKind::AlreadyAnswered,
            "Question already answered",
        );
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(what) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                format!("Record not found: {what}"),
            );
        }
        DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            let game_id = msg.trim_start_matches("GAME_NOT_FOUND:");
            warn!(trace_id = %trace_id, game_id, "Game not found");
            return DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"));
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        warn!(trace_id = %trace_id, raw_error = %detail, "Unique constraint violation");
        let (kind, detail) = unique_violation_to_conflict(&detail);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        let (kind, detail) = unique_violation_to_conflict(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || mentions_sqlstate(&error_msg, "23503")
        || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    fn exec_err(msg: &str) -> DbErr {
        DbErr::Exec(RuntimeErr::Internal(msg.to_string()))
    }

    #[test]
    fn sqlite_badge_unique_violation() {
        let e = exec_err(
            "UNIQUE constraint failed: awarded_badges.user_id, awarded_badges.game_id, awarded_badges.badge_id",
        );
        assert!(map_db_err(e).is_badge_already_owned());
    }

    #[test]
    fn postgres_badge_unique_violation() {
        let e = exec_err(
            "duplicate key value violates unique constraint \"ux_awarded_badges_user_game_badge\"",
        );
        assert!(map_db_err(e).is_badge_already_owned());
    }

    #[test]
    fn other_unique_violation_is_generic() {
        let e = exec_err("UNIQUE constraint failed: game_user_flags.flag");
        assert_eq!(
            map_db_err(e),
            DomainError::conflict(
                ConflictKind::Other("Unique".into()),
                "Unique constraint violation"
            )
        );
    }

    #[test]
    fn custom_game_not_found() {
        let e = DbErr::Custom("GAME_NOT_FOUND:42".into());
        assert!(matches!(
            map_db_err(e),
            DomainError::NotFound(NotFoundKind::Game, _)
        ));
    }

    #[test]
    fn unknown_error_is_infra() {
        let e = exec_err("disk I/O error");
        assert!(matches!(map_db_err(e), DomainError::Infra(_, _)));
    }
}

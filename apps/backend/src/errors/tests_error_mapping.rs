// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::GuessAboutSelf, "no self guesses");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::GuessAboutSelf);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError = DomainError::validation(ValidationKind::EmptyAnswer, "empty").into();
    assert_eq!(app.code().as_str(), "EMPTY_ANSWER");

    let app: AppError = DomainError::validation_other("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let owned = DomainError::conflict(ConflictKind::BadgeAlreadyOwned, "already has it");
    assert!(owned.is_badge_already_owned());
    let app: AppError = owned.into();
    assert_eq!(app.code().as_str(), "BADGE_ALREADY_OWNED");
    assert_eq!(app.status().as_u16(), 409);

    let answered = DomainError::conflict(ConflictKind::AlreadyAnswered, "answered");
    assert!(!answered.is_badge_already_owned());
    let app: AppError = answered.into();
    assert_eq!(app.code().as_str(), "ALREADY_ANSWERED");
    assert_eq!(app.status().as_u16(), 409);

    let unique = DomainError::conflict(ConflictKind::Other("Unique".into()), "dup");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");

    // Generic conflict fallback
    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Question, "no question").into();
    assert_eq!(app.code().as_str(), "QUESTION_NOT_FOUND");

    let app: AppError = DomainError::not_found(NotFoundKind::Other("x".into()), "gone").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn display_includes_kind_and_detail() {
    let e = DomainError::not_found(NotFoundKind::Game, "game 7");
    let s = e.to_string();
    assert!(s.contains("Game"));
    assert!(s.contains("game 7"));
}

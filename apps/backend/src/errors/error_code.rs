//! Error codes for the AboutMe backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No resolvable user for the request
    Unauthorized,

    // Request Validation
    InvalidGameId,
    InvalidUserId,
    /// Guessing about yourself is not a guess
    GuessAboutSelf,
    EmptyAnswer,
    UnknownBadge,
    ValidationError,
    BadRequest,

    // Resource Not Found
    GameNotFound,
    QuestionNotFound,
    NotFound,

    // Conflicts
    BadgeAlreadyOwned,
    AlreadyAnswered,
    UniqueViolation,
    Conflict,

    // System
    DbError,
    DbUnavailable,
    DbTimeout,
    ConfigError,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::GuessAboutSelf => "GUESS_ABOUT_SELF",
            Self::EmptyAnswer => "EMPTY_ANSWER",
            Self::UnknownBadge => "UNKNOWN_BADGE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::BadgeAlreadyOwned => "BADGE_ALREADY_OWNED",
            Self::AlreadyAnswered => "ALREADY_ANSWERED",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Unauthorized,
        ErrorCode::InvalidGameId,
        ErrorCode::InvalidUserId,
        ErrorCode::GuessAboutSelf,
        ErrorCode::EmptyAnswer,
        ErrorCode::UnknownBadge,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::GameNotFound,
        ErrorCode::QuestionNotFound,
        ErrorCode::NotFound,
        ErrorCode::BadgeAlreadyOwned,
        ErrorCode::AlreadyAnswered,
        ErrorCode::UniqueViolation,
        ErrorCode::Conflict,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::DbTimeout,
        ErrorCode::ConfigError,
        ErrorCode::InternalError,
    ];

    #[test]
    fn codes_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code {s}");
            assert!(s
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }
}

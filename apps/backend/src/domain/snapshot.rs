//! Per-(user, game) progression snapshot.
//!
//! The snapshot is recomputed from persisted history on every request and is
//! never the source of truth for anything. Missing information defaults to
//! `false` / `0`.

use serde::{Deserialize, Serialize};

/// Progression flags and counters used to pick the next screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MetadataSnapshot {
    pub is_creator: bool,
    pub seen_game_ready: bool,
    pub seen_before_ask_about_you: bool,
    pub answer_about_myself: i64,
    pub seen_creator_finished_onboarding: bool,
}

/// Names of the snapshot fields a guard can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    IsCreator,
    SeenGameReady,
    SeenBeforeAskAboutYou,
    AnswerAboutMyself,
    SeenCreatorFinishedOnboarding,
}

impl MetadataKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            MetadataKey::IsCreator => "IS_CREATOR",
            MetadataKey::SeenGameReady => "SEEN_GAME_READY",
            MetadataKey::SeenBeforeAskAboutYou => "SEEN_BEFORE_ASK_ABOUT_YOU",
            MetadataKey::AnswerAboutMyself => "ANSWER_ABOUT_MYSELF",
            MetadataKey::SeenCreatorFinishedOnboarding => "SEEN_CREATOR_FINISHED_ONBOARDING",
        }
    }
}

/// A single snapshot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataValue {
    Bool(bool),
    Count(i64),
}

impl MetadataValue {
    /// Numeric view used by ordering guards; `true` counts as 1.
    pub fn as_count(self) -> i64 {
        match self {
            MetadataValue::Bool(b) => i64::from(b),
            MetadataValue::Count(n) => n,
        }
    }
}

impl MetadataSnapshot {
    pub fn get(&self, key: MetadataKey) -> MetadataValue {
        match key {
            MetadataKey::IsCreator => MetadataValue::Bool(self.is_creator),
            MetadataKey::SeenGameReady => MetadataValue::Bool(self.seen_game_ready),
            MetadataKey::SeenBeforeAskAboutYou => {
                MetadataValue::Bool(self.seen_before_ask_about_you)
            }
            MetadataKey::AnswerAboutMyself => MetadataValue::Count(self.answer_about_myself),
            MetadataKey::SeenCreatorFinishedOnboarding => {
                MetadataValue::Bool(self.seen_creator_finished_onboarding)
            }
        }
    }
}

/// One-time flags persisted per (game, user). Setting one is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeenFlag {
    GameReady,
    BeforeAskAboutYou,
    CreatorFinishedOnboarding,
}

impl SeenFlag {
    pub const ALL: [SeenFlag; 3] = [
        SeenFlag::GameReady,
        SeenFlag::BeforeAskAboutYou,
        SeenFlag::CreatorFinishedOnboarding,
    ];

    /// Stored value in `game_user_flags.flag`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SeenFlag::GameReady => "SEEN_GAME_READY",
            SeenFlag::BeforeAskAboutYou => "SEEN_BEFORE_ASK_ABOUT_YOU",
            SeenFlag::CreatorFinishedOnboarding => "SEEN_CREATOR_FINISHED_ONBOARDING",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Fold this flag into a snapshot.
    pub fn apply(self, snapshot: &mut MetadataSnapshot) {
        match self {
            SeenFlag::GameReady => snapshot.seen_game_ready = true,
            SeenFlag::BeforeAskAboutYou => snapshot.seen_before_ask_about_you = true,
            SeenFlag::CreatorFinishedOnboarding => {
                snapshot.seen_creator_finished_onboarding = true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_all_false_and_zero() {
        let s = MetadataSnapshot::default();
        assert_eq!(s.get(MetadataKey::IsCreator), MetadataValue::Bool(false));
        assert_eq!(s.get(MetadataKey::AnswerAboutMyself), MetadataValue::Count(0));
        assert_eq!(
            s.get(MetadataKey::SeenCreatorFinishedOnboarding),
            MetadataValue::Bool(false)
        );
    }

    #[test]
    fn flags_round_trip_through_storage_names() {
        for flag in SeenFlag::ALL {
            assert_eq!(SeenFlag::parse(flag.as_str()), Some(flag));
        }
        assert_eq!(SeenFlag::parse("SEEN_NOTHING"), None);
    }

    #[test]
    fn applying_flags_sets_matching_fields() {
        let mut s = MetadataSnapshot::default();
        SeenFlag::GameReady.apply(&mut s);
        SeenFlag::CreatorFinishedOnboarding.apply(&mut s);
        assert!(s.seen_game_ready);
        assert!(!s.seen_before_ask_about_you);
        assert!(s.seen_creator_finished_onboarding);
    }

    #[test]
    fn snapshot_serializes_with_upper_snake_keys() {
        let s = MetadataSnapshot {
            is_creator: true,
            answer_about_myself: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["IS_CREATOR"], true);
        assert_eq!(json["ANSWER_ABOUT_MYSELF"], 3);
    }
}

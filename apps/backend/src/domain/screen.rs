//! Screens the client can be routed to.

use serde::{Deserialize, Serialize};

use crate::domain::question::Question;

/// One bucket of "how many people guessed this".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub text: String,
    pub count: u32,
    pub correct: bool,
}

/// The player a guess was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetUser {
    pub user_id: i64,
}

/// Current screen of a player in a game. Stored as JSON in `game_user_states.screen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "screenName",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Screen {
    GotBadge {
        badge_id: String,
    },
    CreatorGameReady,
    BeforeStartAboutYou,
    CreatorFinishedOnboardingQuestions,
    QuestionAboutMyself {
        question: Question,
        current_index: i64,
        total_count: i64,
    },
    AnswerFeedback {
        correct: bool,
        points: i64,
        question: Question,
        distribution: Vec<DistributionEntry>,
        target: TargetUser,
    },
    EmptyGameState,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::GotBadge { .. } => "GOT_BADGE",
            Screen::CreatorGameReady => "CREATOR_GAME_READY",
            Screen::BeforeStartAboutYou => "BEFORE_START_ABOUT_YOU",
            Screen::CreatorFinishedOnboardingQuestions => "CREATOR_FINISHED_ONBOARDING_QUESTIONS",
            Screen::QuestionAboutMyself { .. } => "QUESTION_ABOUT_MYSELF",
            Screen::AnswerFeedback { .. } => "ANSWER_FEEDBACK",
            Screen::EmptyGameState => "EMPTY_GAME_STATE",
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::screen::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeHolder {
    pub user_id: i64,
    pub badge_ids: Vec<String>,
}

/// Messages pushed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// The player's current screen changed.
    Screen { game_id: i64, screen: Screen },
    /// Who owns which badge in the game.
    BadgeRoster {
        game_id: i64,
        holders: Vec<BadgeHolder>,
    },
    /// Running totals of self-answers and guesses.
    AnswerCounts {
        game_id: i64,
        about_self: i64,
        about_others: i64,
    },
}

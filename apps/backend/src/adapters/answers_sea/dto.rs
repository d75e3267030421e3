//! DTOs for answers_sea adapter.

#[derive(Debug, Clone)]
pub struct AnswerCreate {
    pub game_id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub about_user_id: i64,
    pub text: String,
    pub is_correct: Option<bool>,
}

impl AnswerCreate {
    /// Answer by `user_id` about themself. Self-answers are never graded.
    pub fn about_self(game_id: i64, question_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            game_id,
            question_id,
            user_id,
            about_user_id: user_id,
            text: text.into(),
            is_correct: None,
        }
    }

    pub fn guess(
        game_id: i64,
        question_id: i64,
        user_id: i64,
        about_user_id: i64,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Self {
        Self {
            game_id,
            question_id,
            user_id,
            about_user_id,
            text: text.into(),
            is_correct: Some(is_correct),
        }
    }
}

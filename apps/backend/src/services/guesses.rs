//! Guessing another player's self-answer.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::scoring::{answer_distribution, answers_match, guess_points};
use crate::domain::screen::{Screen, TargetUser};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::realtime::Notifier;
use crate::repos::{answers, games, points, questions};
use crate::services::game_state::GameStateService;
use crate::state::app_state::AppState;

pub struct GuessService {
    states: GameStateService,
}

impl GuessService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            states: GameStateService::new(notifier),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.notifier.clone())
    }

    /// Grade a guess, pay out, and show `ANSWER_FEEDBACK`.
    ///
    /// A target without a self-answer yet cannot be matched: the guess is
    /// incorrect and earns the consolation points.
    pub async fn submit_guess_about_other<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
        question_id: i64,
        about_user_id: i64,
        text: &str,
    ) -> Result<Screen, DomainError> {
        if about_user_id == user_id {
            return Err(DomainError::validation(
                ValidationKind::GuessAboutSelf,
                "Use the self-answer endpoint to answer about yourself",
            ));
        }
        if text.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyAnswer,
                "Guess must not be empty",
            ));
        }
        games::require_game(conn, game_id).await?;
        let question = questions::require_question(conn, question_id).await?;

        if answers::find_answer(conn, game_id, question_id, user_id, about_user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                format!("Already guessed question {question_id} about user {about_user_id}"),
            ));
        }

        let canonical = answers::canonical_answer(conn, game_id, question_id, about_user_id).await?;
        let correct = canonical
            .as_ref()
            .is_some_and(|c| answers_match(text, &c.text));
        let earned = guess_points(correct);

        games::add_participant(conn, game_id, user_id).await?;
        answers::insert_guess(conn, game_id, question_id, user_id, about_user_id, text, correct)
            .await?;
        points::add_points(conn, user_id, game_id, earned).await?;
        info!(
            game_id,
            user_id,
            question_id,
            about_user_id,
            correct,
            points = earned,
            "Guess graded"
        );

        let guesses = answers::guesses_about(conn, game_id, question_id, about_user_id).await?;
        let distribution = answer_distribution(
            guesses.iter().map(|g| g.text.as_str()),
            canonical.as_ref().map(|c| c.text.as_str()),
        );

        let screen = Screen::AnswerFeedback {
            correct,
            points: earned,
            question: question.for_display(),
            distribution,
            target: TargetUser {
                user_id: about_user_id,
            },
        };
        self.states
            .move_user_to_game_state(conn, game_id, user_id, &screen, None)
            .await?;
        self.states.broadcast_answer_counts(conn, game_id).await?;
        Ok(screen)
    }
}

//! Answer repository functions.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::adapters::answers_sea as answers_adapter;
use crate::adapters::answers_sea::AnswerCreate;
use crate::entities::answers;
use crate::errors::domain::DomainError;

/// Answer domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: i64,
    pub game_id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub about_user_id: i64,
    pub text: String,
    pub is_correct: Option<bool>,
}

impl From<answers::Model> for AnswerRecord {
    fn from(model: answers::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            question_id: model.question_id,
            user_id: model.user_id,
            about_user_id: model.about_user_id,
            text: model.text,
            is_correct: model.is_correct,
        }
    }
}

/// Running totals broadcast to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerCounts {
    pub about_self: i64,
    pub about_others: i64,
}

pub async fn insert_self_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    user_id: i64,
    text: &str,
) -> Result<AnswerRecord, DomainError> {
    let dto = AnswerCreate::about_self(game_id, question_id, user_id, text);
    let model = answers_adapter::insert_answer(conn, dto).await?;
    Ok(AnswerRecord::from(model))
}

pub async fn insert_guess<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    user_id: i64,
    about_user_id: i64,
    text: &str,
    is_correct: bool,
) -> Result<AnswerRecord, DomainError> {
    let dto = AnswerCreate::guess(game_id, question_id, user_id, about_user_id, text, is_correct);
    let model = answers_adapter::insert_answer(conn, dto).await?;
    Ok(AnswerRecord::from(model))
}

/// The target's own answer to the question, used to grade guesses.
pub async fn canonical_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    about_user_id: i64,
) -> Result<Option<AnswerRecord>, DomainError> {
    let model =
        answers_adapter::find_answer(conn, game_id, question_id, about_user_id, about_user_id)
            .await?;
    Ok(model.map(AnswerRecord::from))
}

pub async fn find_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    user_id: i64,
    about_user_id: i64,
) -> Result<Option<AnswerRecord>, DomainError> {
    let model =
        answers_adapter::find_answer(conn, game_id, question_id, user_id, about_user_id).await?;
    Ok(model.map(AnswerRecord::from))
}

pub async fn count_self_answers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<i64, DomainError> {
    let n = answers_adapter::count_self_answers(conn, game_id, user_id).await?;
    Ok(n as i64)
}

/// Position of a stored self-answer among the user's self-answers in the
/// game, counted in insert order. Stable under concurrent submissions.
pub async fn self_answer_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    record: &AnswerRecord,
) -> Result<i64, DomainError> {
    let n = answers_adapter::count_self_answers_through(
        conn,
        record.game_id,
        record.user_id,
        record.id,
    )
    .await?;
    Ok(n as i64)
}

pub async fn self_answered_question_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<HashSet<i64>, DomainError> {
    let ids = answers_adapter::self_answered_question_ids(conn, game_id, user_id).await?;
    Ok(ids.into_iter().collect())
}

pub async fn guesses_about<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    about_user_id: i64,
) -> Result<Vec<AnswerRecord>, DomainError> {
    let models = answers_adapter::guesses_about(conn, game_id, question_id, about_user_id).await?;
    Ok(models.into_iter().map(AnswerRecord::from).collect())
}

pub async fn answer_counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<AnswerCounts, DomainError> {
    let (about_self, about_others) = answers_adapter::count_by_kind(conn, game_id).await?;
    Ok(AnswerCounts {
        about_self: about_self as i64,
        about_others: about_others as i64,
    })
}

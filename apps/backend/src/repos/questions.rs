//! Question bank repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea as questions_adapter;
pub use crate::adapters::questions_sea::QuestionCreate;
use crate::domain::question::{Question, QuestionKind};
use crate::entities::questions;
use crate::errors::domain::{DomainError, NotFoundKind};

impl From<questions::QuestionKind> for QuestionKind {
    fn from(kind: questions::QuestionKind) -> Self {
        match kind {
            questions::QuestionKind::FreeForm => QuestionKind::FreeForm,
            questions::QuestionKind::ChooseOne => QuestionKind::ChooseOne,
        }
    }
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        // Malformed option JSON degrades to no options.
        let options = model
            .options
            .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
            .unwrap_or_default();
        Self {
            id: model.id,
            text: model.text,
            kind: model.kind.into(),
            options,
            allow_other: model.allow_other,
            sensitivity: model.sensitivity,
            max_options: model.max_options.and_then(|m| u16::try_from(m).ok()),
        }
    }
}

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<Question, DomainError> {
    let model = questions_adapter::create_question(conn, dto).await?;
    Ok(Question::from(model))
}

pub async fn find_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i64,
) -> Result<Option<Question>, DomainError> {
    let model = questions_adapter::find_by_id(conn, question_id).await?;
    Ok(model.map(Question::from))
}

pub async fn require_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i64,
) -> Result<Question, DomainError> {
    find_question(conn, question_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {question_id} not found"),
        )
    })
}

pub async fn list_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    let models = questions_adapter::list_ordered(conn).await?;
    Ok(models.into_iter().map(Question::from).collect())
}

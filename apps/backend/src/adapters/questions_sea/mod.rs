//! SeaORM adapter for the question bank.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, DbErr> {
    let options = if dto.options.is_empty() {
        None
    } else {
        Some(serde_json::json!(dto.options))
    };
    questions::ActiveModel {
        id: NotSet,
        text: Set(dto.text),
        kind: Set(dto.kind),
        options: Set(options),
        allow_other: Set(dto.allow_other),
        sensitivity: Set(dto.sensitivity),
        max_options: Set(dto.max_options),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i64,
) -> Result<Option<questions::Model>, DbErr> {
    questions::Entity::find_by_id(question_id).one(conn).await
}

/// All questions in asking order.
pub async fn list_ordered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

//! SeaORM adapter for answers (self-answers and guesses).

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::answers;

pub mod dto;

pub use dto::AnswerCreate;

pub async fn insert_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerCreate,
) -> Result<answers::Model, DbErr> {
    answers::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        question_id: Set(dto.question_id),
        user_id: Set(dto.user_id),
        about_user_id: Set(dto.about_user_id),
        text: Set(dto.text),
        is_correct: Set(dto.is_correct),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    user_id: i64,
    about_user_id: i64,
) -> Result<Option<answers::Model>, DbErr> {
    answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::QuestionId.eq(question_id))
        .filter(answers::Column::UserId.eq(user_id))
        .filter(answers::Column::AboutUserId.eq(about_user_id))
        .one(conn)
        .await
}

pub async fn count_self_answers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<u64, DbErr> {
    answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::UserId.eq(user_id))
        .filter(answers::Column::AboutUserId.eq(user_id))
        .count(conn)
        .await
}

/// Self-answers with an id no greater than `last_id`. Ids are assigned in
/// insert order, so this is the 1-based position of answer `last_id`.
pub async fn count_self_answers_through<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    last_id: i64,
) -> Result<u64, DbErr> {
    answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::UserId.eq(user_id))
        .filter(answers::Column::AboutUserId.eq(user_id))
        .filter(answers::Column::Id.lte(last_id))
        .count(conn)
        .await
}

/// Question ids the user has answered about themself in this game.
pub async fn self_answered_question_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Vec<i64>, DbErr> {
    answers::Entity::find()
        .select_only()
        .column(answers::Column::QuestionId)
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::UserId.eq(user_id))
        .filter(answers::Column::AboutUserId.eq(user_id))
        .into_tuple()
        .all(conn)
        .await
}

/// Guesses other players made about `about_user_id` for a question. The
/// target's own self-answer is excluded.
pub async fn guesses_about<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    question_id: i64,
    about_user_id: i64,
) -> Result<Vec<answers::Model>, DbErr> {
    answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::QuestionId.eq(question_id))
        .filter(answers::Column::AboutUserId.eq(about_user_id))
        .filter(answers::Column::UserId.ne(about_user_id))
        .order_by_asc(answers::Column::Id)
        .all(conn)
        .await
}

/// (self-answers, guesses) recorded in a game.
pub async fn count_by_kind<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(u64, u64), DbErr> {
    let about_self = answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(Expr::col(answers::Column::UserId).equals(answers::Column::AboutUserId))
        .count(conn)
        .await?;
    let about_others = answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(Expr::col(answers::Column::UserId).not_equals(answers::Column::AboutUserId))
        .count(conn)
        .await?;
    Ok((about_self, about_others))
}

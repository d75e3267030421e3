//! SeaORM adapter for games and their participants.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::{game_participants, games};

pub mod dto;

pub use dto::GameCreate;

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_by: Set(dto.created_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;

    add_participant(conn, game.id, dto.created_by).await?;
    Ok(game)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Like `find_by_id` but a missing row is `DbErr::Custom("GAME_NOT_FOUND:<id>")`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

/// Idempotent join.
pub async fn add_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<(), DbErr> {
    let row = game_participants::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    game_participants::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                game_participants::Column::GameId,
                game_participants::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn participant_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DbErr> {
    game_participants::Entity::find()
        .select_only()
        .column(game_participants::Column::UserId)
        .filter(game_participants::Column::GameId.eq(game_id))
        .order_by_asc(game_participants::Column::Id)
        .into_tuple()
        .all(conn)
        .await
}

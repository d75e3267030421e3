//! SeaORM adapter for one-time "seen" flags.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter, QuerySelect, Set,
};

use crate::entities::game_user_flags;

/// Idempotent. Returns whether a row was actually inserted.
pub async fn insert_flag<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    flag: &str,
) -> Result<bool, DbErr> {
    let row = game_user_flags::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        flag: Set(flag.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    let inserted = game_user_flags::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                game_user_flags::Column::GameId,
                game_user_flags::Column::UserId,
                game_user_flags::Column::Flag,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(inserted > 0)
}

pub async fn find_flags<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Vec<String>, DbErr> {
    game_user_flags::Entity::find()
        .select_only()
        .column(game_user_flags::Column::Flag)
        .filter(game_user_flags::Column::GameId.eq(game_id))
        .filter(game_user_flags::Column::UserId.eq(user_id))
        .into_tuple()
        .all(conn)
        .await
}

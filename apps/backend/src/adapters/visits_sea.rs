//! SeaORM adapter for the screen visit log.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::screen_visits;

pub async fn insert_visit<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen_name: &str,
) -> Result<(), DbErr> {
    screen_visits::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        screen_name: Set(screen_name.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await?;
    Ok(())
}

pub async fn count_visits<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen_name: &str,
) -> Result<u64, DbErr> {
    screen_visits::Entity::find()
        .filter(screen_visits::Column::GameId.eq(game_id))
        .filter(screen_visits::Column::UserId.eq(user_id))
        .filter(screen_visits::Column::ScreenName.eq(screen_name))
        .count(conn)
        .await
}

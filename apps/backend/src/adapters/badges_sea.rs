//! SeaORM adapter for awarded badges.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::awarded_badges;

/// Plain insert. A duplicate (user, game, badge) fails on the unique index.
pub async fn insert_awarded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    badge_id: &str,
) -> Result<awarded_badges::Model, DbErr> {
    awarded_badges::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        game_id: Set(game_id),
        badge_id: Set(badge_id.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn owned_badge_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
) -> Result<Vec<String>, DbErr> {
    awarded_badges::Entity::find()
        .select_only()
        .column(awarded_badges::Column::BadgeId)
        .filter(awarded_badges::Column::UserId.eq(user_id))
        .filter(awarded_badges::Column::GameId.eq(game_id))
        .into_tuple()
        .all(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    badge_id: &str,
) -> Result<bool, DbErr> {
    let row = awarded_badges::Entity::find()
        .filter(awarded_badges::Column::UserId.eq(user_id))
        .filter(awarded_badges::Column::GameId.eq(game_id))
        .filter(awarded_badges::Column::BadgeId.eq(badge_id))
        .one(conn)
        .await?;
    Ok(row.is_some())
}

/// Every award in a game, oldest first.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<awarded_badges::Model>, DbErr> {
    awarded_badges::Entity::find()
        .filter(awarded_badges::Column::GameId.eq(game_id))
        .order_by_asc(awarded_badges::Column::Id)
        .all(conn)
        .await
}

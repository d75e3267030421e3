//! SeaORM adapter for per-player screen state.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JsonValue, NotSet, QueryFilter, Set,
};

use crate::entities::game_user_states;

/// Insert or overwrite the (game, user) row. Last write wins.
pub async fn upsert_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen: JsonValue,
    metadata: Option<JsonValue>,
) -> Result<(), DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let row = game_user_states::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        screen: Set(screen),
        metadata: Set(metadata),
        created_at: Set(now),
        updated_at: Set(now),
    };
    game_user_states::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                game_user_states::Column::GameId,
                game_user_states::Column::UserId,
            ])
            .update_columns([
                game_user_states::Column::Screen,
                game_user_states::Column::Metadata,
                game_user_states::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn find_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<game_user_states::Model>, DbErr> {
    game_user_states::Entity::find()
        .filter(game_user_states::Column::GameId.eq(game_id))
        .filter(game_user_states::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

//! SeaORM adapter for the points ledger.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter, QuerySelect, Set,
};

use crate::entities::points_ledger;

/// Add `points` to the (user, game) row, creating it at zero first if absent.
/// The update is a single `points = points + n` statement.
pub async fn increment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    points: i64,
) -> Result<(), DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let seed = points_ledger::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        game_id: Set(game_id),
        points: Set(0),
        updated_at: Set(now),
    };
    points_ledger::Entity::insert(seed)
        .on_conflict(
            OnConflict::columns([
                points_ledger::Column::UserId,
                points_ledger::Column::GameId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    points_ledger::Entity::update_many()
        .col_expr(
            points_ledger::Column::Points,
            Expr::col(points_ledger::Column::Points).add(points),
        )
        .col_expr(points_ledger::Column::UpdatedAt, Expr::val(now).into())
        .filter(points_ledger::Column::UserId.eq(user_id))
        .filter(points_ledger::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn find_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
) -> Result<Option<i64>, DbErr> {
    points_ledger::Entity::find()
        .select_only()
        .column(points_ledger::Column::Points)
        .filter(points_ledger::Column::UserId.eq(user_id))
        .filter(points_ledger::Column::GameId.eq(game_id))
        .into_tuple()
        .one(conn)
        .await
}

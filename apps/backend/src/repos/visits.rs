//! Screen visit log repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::visits_sea as visits_adapter;
use crate::errors::domain::DomainError;

pub async fn record_visit<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen_name: &str,
) -> Result<(), DomainError> {
    visits_adapter::insert_visit(conn, game_id, user_id, screen_name).await?;
    Ok(())
}

pub async fn count_visits<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen_name: &str,
) -> Result<i64, DomainError> {
    let n = visits_adapter::count_visits(conn, game_id, user_id, screen_name).await?;
    Ok(n as i64)
}

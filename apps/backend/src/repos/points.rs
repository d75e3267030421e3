//! Points ledger repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::points_sea as points_adapter;
use crate::errors::domain::DomainError;

/// Total points; 0 when the user has no ledger row yet.
pub async fn total_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
) -> Result<i64, DomainError> {
    let points = points_adapter::find_points(conn, user_id, game_id).await?;
    Ok(points.unwrap_or(0))
}

/// Additive only. Negative amounts are rejected so the ledger never decreases.
pub async fn add_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    points: i64,
) -> Result<(), DomainError> {
    if points < 0 {
        return Err(DomainError::validation_other(format!(
            "points increment must be non-negative, got {points}"
        )));
    }
    if points == 0 {
        return Ok(());
    }
    points_adapter::increment(conn, user_id, game_id, points).await?;
    Ok(())
}

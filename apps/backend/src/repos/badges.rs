//! Awarded badge repository functions.

use std::collections::{BTreeMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::adapters::badges_sea as badges_adapter;
use crate::errors::domain::DomainError;

/// Insert an award. A duplicate surfaces as `Conflict(BadgeAlreadyOwned)`
/// through the unique index mapping.
pub async fn insert_badge<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    badge_id: &str,
) -> Result<(), DomainError> {
    badges_adapter::insert_awarded(conn, user_id, game_id, badge_id).await?;
    Ok(())
}

pub async fn owned_badge_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
) -> Result<HashSet<String>, DomainError> {
    let ids = badges_adapter::owned_badge_ids(conn, user_id, game_id).await?;
    Ok(ids.into_iter().collect())
}

pub async fn has_badge<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    badge_id: &str,
) -> Result<bool, DomainError> {
    Ok(badges_adapter::exists(conn, user_id, game_id, badge_id).await?)
}

/// Badge ids per user in award order, users ascending.
pub async fn roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<BTreeMap<i64, Vec<String>>, DomainError> {
    let rows = badges_adapter::list_by_game(conn, game_id).await?;
    let mut by_user: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for row in rows {
        by_user.entry(row.user_id).or_default().push(row.badge_id);
    }
    Ok(by_user)
}

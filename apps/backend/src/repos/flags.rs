//! One-time flag repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::flags_sea as flags_adapter;
use crate::domain::snapshot::SeenFlag;
use crate::errors::domain::DomainError;

/// Returns true if the flag was not set before.
pub async fn set_flag<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    flag: SeenFlag,
) -> Result<bool, DomainError> {
    Ok(flags_adapter::insert_flag(conn, game_id, user_id, flag.as_str()).await?)
}

/// Flags set for the player. Unknown stored values are skipped.
pub async fn flags_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Vec<SeenFlag>, DomainError> {
    let raw = flags_adapter::find_flags(conn, game_id, user_id).await?;
    Ok(raw.iter().filter_map(|s| SeenFlag::parse(s)).collect())
}

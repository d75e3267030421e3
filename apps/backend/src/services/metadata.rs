//! Per-(game, user) progression snapshot built from persisted history.

use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::domain::snapshot::MetadataSnapshot;
use crate::errors::domain::DomainError;
use crate::repos::{answers, flags, games};

/// An unknown game yields the default snapshot. Store failures propagate so
/// no screen is chosen from incomplete history.
pub async fn snapshot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<MetadataSnapshot, DomainError> {
    match try_snapshot(conn, game_id, user_id).await? {
        Some(s) => Ok(s),
        None => {
            warn!(game_id, user_id, "Game not found; using default snapshot");
            Ok(MetadataSnapshot::default())
        }
    }
}

/// `Ok(None)` when the game does not exist.
pub async fn try_snapshot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<MetadataSnapshot>, DomainError> {
    let Some(game) = games::find_game(conn, game_id).await? else {
        return Ok(None);
    };

    let mut snapshot = MetadataSnapshot {
        is_creator: game.created_by == user_id,
        answer_about_myself: answers::count_self_answers(conn, game_id, user_id).await?,
        ..Default::default()
    };
    for flag in flags::flags_for(conn, game_id, user_id).await? {
        flag.apply(&mut snapshot);
    }
    Ok(Some(snapshot))
}

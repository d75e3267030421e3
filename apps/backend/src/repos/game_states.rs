//! Per-player screen state repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::game_states_sea as game_states_adapter;
use crate::domain::screen::Screen;
use crate::domain::snapshot::MetadataSnapshot;
use crate::errors::domain::DomainError;

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::validation_other(format!("failed to serialize state: {e}")))
}

pub async fn save_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    screen: &Screen,
    metadata: Option<&MetadataSnapshot>,
) -> Result<(), DomainError> {
    let screen_json = to_json(screen)?;
    let metadata_json = metadata.map(to_json).transpose()?;
    game_states_adapter::upsert_state(conn, game_id, user_id, screen_json, metadata_json).await?;
    Ok(())
}

/// Current screen, if the player has one and it still parses.
pub async fn load_screen<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<Screen>, DomainError> {
    let row = game_states_adapter::find_state(conn, game_id, user_id).await?;
    Ok(row.and_then(|r| serde_json::from_value(r.screen).ok()))
}

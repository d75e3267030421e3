//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_by: model.created_by,
        }
    }
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: impl Into<String>,
    created_by: i64,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(name, created_by);
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn find_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Missing game is `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Ok(Game::from(game))
}

pub async fn add_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<(), DomainError> {
    games_adapter::add_participant(conn, game_id, user_id).await?;
    Ok(())
}

pub async fn participant_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(games_adapter::participant_ids(conn, game_id).await?)
}

//! Screen transitions and game-wide counters.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use tracing::{debug, warn};

use crate::domain::screen::Screen;
use crate::domain::snapshot::MetadataSnapshot;
use crate::errors::domain::DomainError;
use crate::realtime::{Notifier, ServerEvent};
use crate::repos::{answers, game_states, visits};

#[derive(Clone)]
pub struct GameStateService {
    notifier: Arc<dyn Notifier>,
}

impl GameStateService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Persist `screen` as the player's current state, push it to the
    /// player's private channel, and log the visit. A failed visit log is
    /// only a warning.
    pub async fn move_user_to_game_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
        screen: &Screen,
        metadata: Option<&MetadataSnapshot>,
    ) -> Result<(), DomainError> {
        game_states::save_state(conn, game_id, user_id, screen, metadata).await?;
        debug!(game_id, user_id, screen = screen.name(), "Moved user to screen");

        self.notifier
            .notify_user(
                game_id,
                user_id,
                ServerEvent::Screen {
                    game_id,
                    screen: screen.clone(),
                },
            )
            .await;

        if let Err(e) = visits::record_visit(conn, game_id, user_id, screen.name()).await {
            warn!(game_id, user_id, screen = screen.name(), error = %e, "Failed to record screen visit");
        }
        Ok(())
    }

    /// Broadcast how many self-answers and guesses the game has so far.
    pub async fn broadcast_answer_counts<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<(), DomainError> {
        let counts = answers::answer_counts(conn, game_id).await?;
        self.notifier
            .notify_game(
                game_id,
                ServerEvent::AnswerCounts {
                    game_id,
                    about_self: counts.about_self,
                    about_others: counts.about_others,
                },
            )
            .await;
        Ok(())
    }
}

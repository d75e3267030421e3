//! Badge awarding: the effectful half of badge progression.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use tracing::{debug, info, warn};

use crate::domain::badges::{next_missing_badge, Badge, BadgeCatalog};
use crate::domain::screen::Screen;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::realtime::{BadgeHolder, Notifier, ServerEvent};
use crate::repos::{badges, points};
use crate::services::game_state::GameStateService;

#[derive(Clone)]
pub struct BadgeService {
    catalog: Arc<BadgeCatalog>,
    notifier: Arc<dyn Notifier>,
    states: GameStateService,
}

impl BadgeService {
    pub fn new(catalog: Arc<BadgeCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        let states = GameStateService::new(notifier.clone());
        Self {
            catalog,
            notifier,
            states,
        }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// The next badge owed to the player, if any.
    ///
    /// Grants the participation badge on the way if the player lacks it. That
    /// grant never produces a screen and a lost race on it is ignored.
    pub async fn missing_badge<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        game_id: i64,
    ) -> Result<Option<Badge>, DomainError> {
        let total_points = points::total_points(conn, user_id, game_id).await?;
        let mut owned = badges::owned_badge_ids(conn, user_id, game_id).await?;

        if let Some(participation) = self.catalog.participation() {
            if !owned.contains(&participation.id) {
                match self.award_badge(conn, user_id, game_id, &participation.id).await {
                    Ok(_) => {}
                    Err(e) if e.is_badge_already_owned() => {
                        debug!(user_id, game_id, "Participation badge already granted");
                    }
                    Err(e) => return Err(e),
                }
                owned.insert(participation.id.clone());
            }
        }

        Ok(next_missing_badge(&self.catalog, total_points, &owned).cloned())
    }

    /// Insert the award and broadcast the game's roster.
    ///
    /// An already-owned badge is `Conflict(BadgeAlreadyOwned)` whether the
    /// pre-check or the unique index catches it.
    pub async fn award_badge<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        game_id: i64,
        badge_id: &str,
    ) -> Result<Badge, DomainError> {
        let badge = self.catalog.get(badge_id).cloned().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownBadge,
                format!("Unknown badge {badge_id}"),
            )
        })?;

        if badges::has_badge(conn, user_id, game_id, badge_id).await? {
            return Err(already_owned(badge_id));
        }

        if let Err(e) = badges::insert_badge(conn, user_id, game_id, badge_id).await {
            if e.is_badge_already_owned() {
                warn!(user_id, game_id, badge_id, "Concurrent badge award lost the race");
            }
            return Err(e);
        }
        info!(user_id, game_id, badge_id, "Badge awarded");

        self.broadcast_roster(conn, game_id).await?;
        Ok(badge)
    }

    /// `award_badge` followed by a forced move to `GOT_BADGE`. Errors from
    /// the award leave the player's screen untouched.
    pub async fn award_badge_and_show_screen<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        game_id: i64,
        badge_id: &str,
    ) -> Result<Screen, DomainError> {
        let badge = self.award_badge(conn, user_id, game_id, badge_id).await?;
        let screen = Screen::GotBadge { badge_id: badge.id };
        self.states
            .move_user_to_game_state(conn, game_id, user_id, &screen, None)
            .await?;
        Ok(screen)
    }

    pub async fn roster<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<BadgeHolder>, DomainError> {
        let by_user = badges::roster(conn, game_id).await?;
        Ok(by_user
            .into_iter()
            .map(|(user_id, badge_ids)| BadgeHolder { user_id, badge_ids })
            .collect())
    }

    async fn broadcast_roster<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<(), DomainError> {
        let holders = self.roster(conn, game_id).await?;
        self.notifier
            .notify_game(game_id, ServerEvent::BadgeRoster { game_id, holders })
            .await;
        Ok(())
    }
}

fn already_owned(badge_id: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::BadgeAlreadyOwned,
        format!("Badge {badge_id} already owned"),
    )
}

//! Push notifications to connected players.
//!
//! Services depend only on the [`Notifier`] trait; [`ChannelHub`] is the
//! in-process implementation used by the server and the tests.

mod events;
mod hub;

use async_trait::async_trait;
pub use events::{BadgeHolder, ServerEvent};
pub use hub::{ChannelHub, Subscription};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver to one player's private channel in a game.
    async fn notify_user(&self, game_id: i64, user_id: i64, event: ServerEvent);

    /// Deliver to every subscriber of a game.
    async fn notify_game(&self, game_id: i64, event: ServerEvent);
}

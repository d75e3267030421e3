use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;
use uuid::Uuid;

use super::{Notifier, ServerEvent};

struct Subscriber {
    user_id: i64,
    tx: UnboundedSender<ServerEvent>,
}

/// Subscriber registry keyed by game, then by subscription token.
#[derive(Default)]
pub struct ChannelHub {
    games: DashMap<i64, DashMap<Uuid, Subscriber>>,
}

/// Receiving end handed to a connection. Drop it or call
/// [`ChannelHub::unsubscribe`] to stop delivery.
pub struct Subscription {
    pub token: Uuid,
    pub game_id: i64,
    pub rx: UnboundedReceiver<ServerEvent>,
}

impl ChannelHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, game_id: i64, user_id: i64) -> Subscription {
        let (tx, rx) = unbounded_channel();
        let token = Uuid::new_v4();
        self.games
            .entry(game_id)
            .or_default()
            .insert(token, Subscriber { user_id, tx });
        debug!(game_id, user_id, %token, "Subscribed");
        Subscription { token, game_id, rx }
    }

    pub fn unsubscribe(&self, game_id: i64, token: Uuid) {
        if let Some(entry) = self.games.get(&game_id) {
            entry.remove(&token);
        }
        self.games.remove_if(&game_id, |_, subs| subs.is_empty());
    }

    pub fn subscriber_count(&self, game_id: i64) -> usize {
        self.games.get(&game_id).map(|e| e.len()).unwrap_or(0)
    }

    fn send_where(&self, game_id: i64, event: &ServerEvent, wanted: impl Fn(&Subscriber) -> bool) {
        let mut closed = Vec::new();
        if let Some(entry) = self.games.get(&game_id) {
            for sub in entry.iter().filter(|s| wanted(s.value())) {
                if sub.value().tx.send(event.clone()).is_err() {
                    closed.push(*sub.key());
                }
            }
        }
        for token in closed {
            self.unsubscribe(game_id, token);
        }
    }
}

#[async_trait]
impl Notifier for ChannelHub {
    async fn notify_user(&self, game_id: i64, user_id: i64, event: ServerEvent) {
        self.send_where(game_id, &event, |s| s.user_id == user_id);
    }

    async fn notify_game(&self, game_id: i64, event: ServerEvent) {
        self.send_where(game_id, &event, |_| true);
    }
}

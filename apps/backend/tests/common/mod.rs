#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use aboutme::config::db::DbProfile;
use aboutme::domain::badges::BadgeCatalog;
use aboutme::domain::question::Question;
use aboutme::infra::state::build_state;
use aboutme::realtime::{ChannelHub, Notifier, ServerEvent, Subscription};
use aboutme::repos::games::{self, Game};
use aboutme::repos::questions::{self, QuestionCreate};
use aboutme::state::app_state::AppState;
use sea_orm::DatabaseConnection;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// State over a private in-memory database plus a handle on its hub.
pub struct TestEnv {
    pub state: AppState,
    pub hub: Arc<ChannelHub>,
}

impl TestEnv {
    pub fn db(&self) -> &DatabaseConnection {
        self.state.db().expect("test state always has a database")
    }
}

pub async fn test_env() -> TestEnv {
    test_env_with_catalog(BadgeCatalog::default()).await
}

pub async fn test_env_with_catalog(catalog: BadgeCatalog) -> TestEnv {
    let hub = Arc::new(ChannelHub::new());
    let state = build_state()
        .with_db(DbProfile::InMemory)
        .with_catalog(catalog)
        .with_notifier(hub.clone() as Arc<dyn Notifier>)
        .build()
        .await
        .expect("build in-memory state");
    TestEnv { state, hub }
}

pub async fn seed_game(db: &DatabaseConnection, creator: i64) -> Game {
    games::create_game(db, backend_test_support::unique_helpers::unique_game_name(), creator)
        .await
        .expect("create game")
}

/// `n` free-form questions, in bank order.
pub async fn seed_questions(db: &DatabaseConnection, n: usize) -> Vec<Question> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let q = questions::create_question(db, QuestionCreate::free_form(format!("Question {i}?")))
            .await
            .expect("create question");
        out.push(q);
    }
    out
}

/// Everything queued on a subscription so far.
pub fn drain(sub: &mut Subscription) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(ev) = sub.rx.try_recv() {
        events.push(ev);
    }
    events
}

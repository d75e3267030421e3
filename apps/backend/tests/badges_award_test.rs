mod common;

use aboutme::domain::badges::{Badge, BadgeCatalog};
use aboutme::domain::screen::Screen;
use aboutme::errors::domain::{DomainError, ValidationKind};
use aboutme::realtime::{BadgeHolder, ServerEvent};
use aboutme::repos::{badges, game_states, points};
use aboutme::services::{BadgeService, ProgressionService};
use common::{drain, seed_game, test_env, test_env_with_catalog};

const CREATOR: i64 = 1;
const PLAYER: i64 = 7;

fn service(env: &common::TestEnv) -> BadgeService {
    BadgeService::new(env.state.catalog.clone(), env.state.notifier.clone())
}

#[tokio::test]
async fn concurrent_awards_insert_one_row() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let svc = service(&env);

    let (a, b) = tokio::join!(
        svc.award_badge(db, PLAYER, game.id, "curious"),
        svc.award_badge(db, PLAYER, game.id, "curious"),
    );

    let (ok, err): (Vec<_>, Vec<_>) = [a, b].into_iter().partition(Result::is_ok);
    assert_eq!(ok.len(), 1);
    assert_eq!(err.len(), 1);
    assert!(err[0].as_ref().unwrap_err().is_badge_already_owned());

    let owned = badges::owned_badge_ids(db, PLAYER, game.id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert!(owned.contains("curious"));
}

#[tokio::test]
async fn unknown_badge_is_rejected() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;

    let err = service(&env)
        .award_badge(db, PLAYER, game.id, "astronaut")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownBadge, _)
    ));
}

#[tokio::test]
async fn award_broadcasts_roster_to_the_game() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let mut watcher = env.hub.subscribe(game.id, CREATOR);

    service(&env)
        .award_badge(db, PLAYER, game.id, "curious")
        .await
        .unwrap();

    let events = drain(&mut watcher);
    assert_eq!(
        events,
        vec![ServerEvent::BadgeRoster {
            game_id: game.id,
            holders: vec![BadgeHolder {
                user_id: PLAYER,
                badge_ids: vec!["curious".into()],
            }],
        }]
    );
}

#[tokio::test]
async fn forced_award_moves_player_to_badge_screen() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let svc = service(&env);

    let screen = svc
        .award_badge_and_show_screen(db, PLAYER, game.id, "oracle")
        .await
        .unwrap();
    assert_eq!(
        screen,
        Screen::GotBadge {
            badge_id: "oracle".into()
        }
    );
    assert_eq!(
        game_states::load_screen(db, game.id, PLAYER).await.unwrap(),
        Some(screen)
    );
}

#[tokio::test]
async fn forced_award_of_owned_badge_leaves_screen_alone() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let svc = service(&env);

    svc.award_badge(db, PLAYER, game.id, "curious").await.unwrap();
    let before = ProgressionService::from_state(&env.state)
        .get_next_screen(db, game.id, PLAYER)
        .await
        .unwrap();

    let err = svc
        .award_badge_and_show_screen(db, PLAYER, game.id, "curious")
        .await
        .unwrap_err();
    assert!(err.is_badge_already_owned());
    assert_eq!(
        game_states::load_screen(db, game.id, PLAYER).await.unwrap(),
        Some(before)
    );
}

#[tokio::test]
async fn badges_are_unlocked_one_rank_at_a_time() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let svc = service(&env);

    points::add_points(db, PLAYER, game.id, 120).await.unwrap();

    let mut unlocked = Vec::new();
    while let Some(badge) = svc.missing_badge(db, PLAYER, game.id).await.unwrap() {
        svc.award_badge(db, PLAYER, game.id, &badge.id).await.unwrap();
        unlocked.push(badge.id);
    }
    assert_eq!(unlocked, vec!["curious", "good_listener", "mind_reader"]);
    assert!(badges::has_badge(db, PLAYER, game.id, "warming_up").await.unwrap());
}

#[tokio::test]
async fn catalog_without_participation_badge_grants_nothing_up_front() {
    let catalog = BadgeCatalog::new(vec![Badge::new("first_steps", "First Steps", 5)]).unwrap();
    let env = test_env_with_catalog(catalog).await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;
    let svc = service(&env);

    assert_eq!(svc.missing_badge(db, PLAYER, game.id).await.unwrap(), None);
    assert!(badges::owned_badge_ids(db, PLAYER, game.id)
        .await
        .unwrap()
        .is_empty());

    points::add_points(db, PLAYER, game.id, 5).await.unwrap();
    let missing = svc.missing_badge(db, PLAYER, game.id).await.unwrap();
    assert_eq!(missing.map(|b| b.id), Some("first_steps".to_string()));
}

#[tokio::test]
async fn ledger_rejects_negative_increments() {
    let env = test_env().await;
    let db = env.db();
    let game = seed_game(db, CREATOR).await;

    points::add_points(db, PLAYER, game.id, 10).await.unwrap();
    assert!(points::add_points(db, PLAYER, game.id, -3).await.is_err());
    points::add_points(db, PLAYER, game.id, 0).await.unwrap();
    assert_eq!(points::total_points(db, PLAYER, game.id).await.unwrap(), 10);
}

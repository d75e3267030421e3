mod common;

use aboutme::middleware::request_trace::RequestTrace;
use aboutme::routes;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{seed_game, seed_questions, test_env};
use serde_json::{json, Value};

const CREATOR: i64 = 1;
const PLAYER: i64 = 5;

macro_rules! init_app {
    ($env:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::Data::new($env.state.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_database_and_migrations() {
    let env = test_env().await;
    let app = init_app!(env);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000001_progression");
    assert_eq!(body["badges"], 5);
}

#[actix_web::test]
async fn next_requires_a_user() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let app = init_app!(env);

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/next", game.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn next_returns_the_screen_as_json() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let app = init_app!(env);

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/next", game.id))
        .insert_header(("x-user-id", CREATOR.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"screenName": "CREATOR_GAME_READY"}));
}

#[actix_web::test]
async fn malformed_game_id_is_a_bad_request() {
    let env = test_env().await;
    let app = init_app!(env);

    let req = test::TestRequest::get()
        .uri("/api/games/abc/next")
        .insert_header(("x-user-id", "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_GAME_ID",
        StatusCode::BAD_REQUEST,
        Some("abc"),
    )
    .await;
}

#[actix_web::test]
async fn duplicate_self_answer_is_a_conflict() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let q = seed_questions(env.db(), 2).await.remove(0);
    let app = init_app!(env);

    let body = json!({"questionId": q.id, "text": "Mountains"});
    let uri = format!("/api/games/{}/answers/self", game.id);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(("x-user-id", PLAYER.to_string()))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let screen: Value = test::read_body_json(resp).await;
    assert_eq!(screen["screenName"], "BEFORE_START_ABOUT_YOU");

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(("x-user-id", PLAYER.to_string()))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ALREADY_ANSWERED",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn guess_about_self_is_rejected() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let q = seed_questions(env.db(), 1).await.remove(0);
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/answers/guess", game.id))
        .insert_header(("x-user-id", PLAYER.to_string()))
        .set_json(json!({"questionId": q.id, "aboutUserId": PLAYER, "text": "me"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "GUESS_ABOUT_SELF",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn guess_requires_json_body() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let app = init_app!(env);

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/answers/guess", game.id))
        .insert_header(("x-user-id", PLAYER.to_string()))
        .set_payload("questionId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("application/json"),
    )
    .await;
}

#[actix_web::test]
async fn badges_lists_catalog_and_holders() {
    let env = test_env().await;
    let game = seed_game(env.db(), CREATOR).await;
    let app = init_app!(env);

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/next", game.id))
        .insert_header(("x-user-id", CREATOR.to_string()))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/badges", game.id))
        .insert_header(("x-user-id", PLAYER.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["catalog"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        body["holders"],
        json!([{"userId": CREATOR, "badgeIds": ["warming_up"]}])
    );
}

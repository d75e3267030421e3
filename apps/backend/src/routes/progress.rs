//! Progression HTTP routes: the three inbound triggers plus the badge roster.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::domain::badges::Badge;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::realtime::BadgeHolder;
use crate::services::{BadgeService, GuessService, ProgressionService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAnswerRequest {
    pub question_id: i64,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub question_id: i64,
    pub about_user_id: i64,
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgesResponse {
    pub catalog: Vec<Badge>,
    pub holders: Vec<BadgeHolder>,
}

/// GET /api/games/{game_id}/next
async fn next_screen(
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let screen = ProgressionService::from_state(&app_state)
        .get_next_screen(db, game_id.0, user.id)
        .await?;
    Ok(HttpResponse::Ok().json(screen))
}

/// POST /api/games/{game_id}/answers/self
async fn submit_self_answer(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<SelfAnswerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let screen = ProgressionService::from_state(&app_state)
        .submit_self_answer(db, game_id.0, user.id, body.question_id, &body.text)
        .await?;
    Ok(HttpResponse::Ok().json(screen))
}

/// POST /api/games/{game_id}/answers/guess
async fn submit_guess(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let screen = GuessService::from_state(&app_state)
        .submit_guess_about_other(
            db,
            game_id.0,
            user.id,
            body.question_id,
            body.about_user_id,
            &body.text,
        )
        .await?;
    Ok(HttpResponse::Ok().json(screen))
}

/// GET /api/games/{game_id}/badges
async fn badges(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let service = BadgeService::new(app_state.catalog.clone(), app_state.notifier.clone());
    let holders = service.roster(db, game_id.0).await?;
    Ok(HttpResponse::Ok().json(BadgesResponse {
        catalog: service.catalog().badges().to_vec(),
        holders,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{game_id}/next", web::get().to(next_screen))
        .route("/{game_id}/answers/self", web::post().to(submit_self_answer))
        .route("/{game_id}/answers/guess", web::post().to(submit_guess))
        .route("/{game_id}/badges", web::get().to(badges));
}

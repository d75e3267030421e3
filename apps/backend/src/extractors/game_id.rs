use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game ID extracted from the route path parameter. Existence is checked by
/// the services that need it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl GameId {
    fn parse(req: &HttpRequest) -> Result<Self, AppError> {
        let game_id_str = req.match_info().get("game_id").ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
        })?;

        let game_id = game_id_str.parse::<i64>().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Invalid game id: {game_id_str}"),
            )
        })?;

        if game_id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {game_id}"),
            ));
        }
        Ok(GameId(game_id))
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req))
    }
}

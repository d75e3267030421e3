use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Header set by the upstream identity layer once it has resolved the caller.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity. Missing or malformed identity is `Unauthorized` and the
/// handler never runs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

impl CurrentUser {
    fn from_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(AppError::unauthorized)?;
        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(CurrentUser { id }),
            _ => {
                debug!(raw, "Rejected malformed user id header");
                Err(AppError::unauthorized())
            }
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req))
    }
}

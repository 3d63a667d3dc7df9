#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod categories;
pub mod plants;
pub mod predict;

use crate::api_error::ApiError;

/// Path ids are positive `SERIAL` keys; anything else is a bad request.
pub(crate) fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::BadRequest(format!("invalid id: {raw}")))
}

//! Typed API error for HTTP handlers.
//!
//! Two body shapes are in use: the plant and predict routes answer
//! `{"error": ...}`, the category routes answer `{"success": false,
//! "message": ...}`. [`ApiError`] renders the first, [`Enveloped`] the second.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error with HTTP status code and client-facing message.
///
/// `Internal` logs the real error server-side and returns only its static
/// message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested resource doesn't exist.
    NotFound(String),
    /// 409 Conflict: unique name already taken.
    Conflict(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal { message: &'static str, source: anyhow::Error },
    /// 500 carrying the classifier's own error body.
    Upstream(serde_json::Value),
}

impl ApiError {
    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { message, source: source.into() }
    }

    fn into_parts(self) -> (StatusCode, serde_json::Value) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.into()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.into()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.into()),
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message.into())
            },
            Self::Upstream(payload) => (StatusCode::INTERNAL_SERVER_ERROR, payload),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.into_parts();
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

/// [`ApiError`] rendered as `{"success": false, "message": ...}`.
#[derive(Debug)]
pub struct Enveloped(pub ApiError);

impl From<ApiError> for Enveloped {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for Enveloped {
    fn into_response(self) -> Response {
        let (status, message) = self.0.into_parts();
        (status, Json(serde_json::json!({"success": false, "message": message}))).into_response()
    }
}

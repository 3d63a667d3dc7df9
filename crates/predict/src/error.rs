//! Typed error enum for the prediction client.

use thiserror::Error;

/// Errors from classifier calls.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// The classifier answered with a non-success status.
    #[error("classifier returned HTTP {code}: {payload}")]
    Upstream { code: u16, payload: serde_json::Value },
    #[error("classifier response is not JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

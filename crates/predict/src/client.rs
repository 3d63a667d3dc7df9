use flora_core::PREDICT_TIMEOUT_SECS;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::PredictError;

/// Image received from a client, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Classifier answer as returned to API clients.
///
/// `prediction` is the classifier body verbatim (for example
/// `{dataset_id, nama_tumbuhan, image_url}`); `dataset_id` is lifted out of it
/// for convenience and omitted when the classifier did not send one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub prediction: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<serde_json::Value>,
}

impl Prediction {
    fn from_body(body: serde_json::Value) -> Self {
        let dataset_id = body.get("dataset_id").cloned();
        Self { prediction: body, dataset_id }
    }
}

/// Client for the classifier's multipart `image` endpoint.
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    /// Creates a client posting to `endpoint`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(endpoint: String) -> Result<Self, PredictError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(PREDICT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PredictError::ClientInit(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the image and return the classifier's answer.
    ///
    /// # Errors
    /// - [`PredictError::HttpRequest`] when the classifier cannot be reached.
    /// - [`PredictError::Upstream`] for a non-success status, carrying its body.
    /// - [`PredictError::InvalidResponse`] when a success body is not JSON.
    pub async fn predict(&self, image: ImageUpload) -> Result<Prediction, PredictError> {
        let size = image.bytes.len();
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| PredictError::InvalidUpload(e.to_string()))?;
        }
        let form = Form::new().part("image", part);

        tracing::debug!(endpoint = %self.endpoint, size, "forwarding image to classifier");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Relay JSON error bodies as JSON, anything else as a string.
            let payload: serde_json::Value = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body));
            tracing::warn!(status = status.as_u16(), "classifier returned an error");
            return Err(PredictError::Upstream { code: status.as_u16(), payload });
        }

        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(PredictError::InvalidResponse)?;
        Ok(Prediction::from_body(body))
    }
}

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use std::sync::Arc;

use flora_predict::{ImageUpload, PredictError, Prediction};

use crate::AppState;
use crate::api_error::ApiError;

const NO_IMAGE: &str = "No image file uploaded";

/// First multipart field named `image`, if any.
async fn read_image(mut multipart: Multipart) -> Result<Option<ImageUpload>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(ImageUpload { file_name, content_type, bytes: bytes.to_vec() }));
    }
    Ok(None)
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Prediction>, ApiError> {
    let Ok(multipart) = multipart else {
        return Err(ApiError::BadRequest(NO_IMAGE.to_owned()));
    };
    let Some(image) = read_image(multipart).await? else {
        return Err(ApiError::BadRequest(NO_IMAGE.to_owned()));
    };

    match state.predictor.predict(image).await {
        Ok(prediction) => Ok(Json(prediction)),
        Err(PredictError::Upstream { code, payload }) => {
            tracing::warn!(status = code, "classifier rejected the image");
            Err(ApiError::Upstream(payload))
        },
        Err(e) => Err(ApiError::internal("Something went wrong with the prediction API", e)),
    }
}

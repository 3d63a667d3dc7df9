use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use flora_core::Category;
use flora_service::ServiceError;

use super::parse_id;
use crate::AppState;
use crate::api_error::{ApiError, Enveloped};
use crate::api_types::CategoryRequest;
use crate::response_types::{DataEnvelope, MessageEnvelope};

const NOT_FOUND: &str = "Kategori tidak ditemukan";
const NAME_REQUIRED: &str = "nama_kategori wajib diisi";
const DUPLICATE: &str = "Kategori sudah ada";
const SERVER_ERROR: &str = "Terjadi kesalahan pada server";

fn category_error(err: ServiceError, message: &'static str) -> Enveloped {
    let err = match err {
        ServiceError::InvalidInput(_) => ApiError::BadRequest(NAME_REQUIRED.to_owned()),
        ServiceError::Conflict(_) => ApiError::Conflict(DUPLICATE.to_owned()),
        other => ApiError::internal(message, other),
    };
    Enveloped(err)
}

fn name_from(payload: Result<Json<CategoryRequest>, JsonRejection>) -> Result<String, Enveloped> {
    payload
        .ok()
        .and_then(|Json(req)| req.nama_kategori)
        .ok_or_else(|| ApiError::BadRequest(NAME_REQUIRED.to_owned()).into())
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, Enveloped> {
    state
        .category_service
        .list_categories()
        .await
        .map(Json)
        .map_err(|e| category_error(e, "Internal Server Error"))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<Category>>, Enveloped> {
    let id = parse_id(&id)?;
    let category = state
        .category_service
        .get_category(id)
        .await
        .map_err(|e| category_error(e, SERVER_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
    Ok(Json(DataEnvelope::ok(category)))
}

pub async fn add_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataEnvelope<Category>>), Enveloped> {
    let name = name_from(payload)?;
    let category = state
        .category_service
        .add_category(&name)
        .await
        .map_err(|e| category_error(e, "Terjadi kesalahan di server"))?;
    Ok((StatusCode::CREATED, Json(DataEnvelope::ok(category))))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<DataEnvelope<Category>>, Enveloped> {
    let id = parse_id(&id)?;
    let name = name_from(payload)?;
    let category = state
        .category_service
        .update_category(id, &name)
        .await
        .map_err(|e| category_error(e, SERVER_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
    Ok(Json(DataEnvelope::ok(category)))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageEnvelope>, Enveloped> {
    let id = parse_id(&id)?;
    state
        .category_service
        .delete_category(id)
        .await
        .map_err(|e| category_error(e, SERVER_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
    Ok(Json(MessageEnvelope { success: true, message: "Kategori berhasil dihapus" }))
}

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use flora_core::{NewPlant, PlantUpdate, PlantView};
use flora_service::ServiceError;

use super::parse_id;
use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{AddPlantRequest, UpdatePlantRequest};
use crate::response_types::{MessageResponse, PlantCreatedResponse};

const FIELDS_REQUIRED: &str = "dataset_id, nama_indonesia, dan deskripsi wajib diisi";

pub async fn list_plants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlantView>>, ApiError> {
    let plants = state
        .plant_service
        .list_plants()
        .await
        .map_err(|e| ApiError::internal("Internal server error", e))?;
    Ok(Json(
        plants.into_iter().map(|p| p.with_image_base(&state.public_base_url)).collect(),
    ))
}

pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlantView>, ApiError> {
    let id = parse_id(&id)?;
    let plant = state
        .plant_service
        .get_plant(id)
        .await
        .map_err(|e| ApiError::internal("Terjadi kesalahan server", e))?
        .ok_or_else(|| ApiError::NotFound("Tanaman tidak ditemukan".to_owned()))?;
    Ok(Json(plant.with_image_base(&state.public_base_url)))
}

pub async fn add_plant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddPlantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlantCreatedResponse>), ApiError> {
    let Ok(Json(req)) = payload else {
        return Err(ApiError::BadRequest(FIELDS_REQUIRED.to_owned()));
    };
    let (Some(dataset_id), Some(local_name), Some(description)) =
        (req.dataset_id, req.nama_indonesia, req.deskripsi)
    else {
        return Err(ApiError::BadRequest(FIELDS_REQUIRED.to_owned()));
    };

    let plant = NewPlant {
        dataset_id,
        local_name,
        description,
        category_ids: req.category_ids.unwrap_or_default(),
    };
    let plant_id = state.plant_service.create_plant(plant).await.map_err(|e| match e {
        ServiceError::InvalidInput(_) => ApiError::BadRequest(FIELDS_REQUIRED.to_owned()),
        other => ApiError::internal("Internal server error", other),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(PlantCreatedResponse { message: "Plant berhasil ditambahkan", plant_id }),
    ))
}

pub async fn update_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePlantRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Ok(Json(req)) = payload else {
        return Err(ApiError::BadRequest("nama_indonesia dan deskripsi wajib diisi".to_owned()));
    };

    let update = PlantUpdate {
        local_name: req.nama_indonesia.unwrap_or_default(),
        description: req.deskripsi.unwrap_or_default(),
        category_ids: req.category_ids.unwrap_or_default(),
    };
    state.plant_service.update_plant(id, update).await.map_err(|e| match e {
        ServiceError::InvalidInput(_) => {
            ApiError::BadRequest("nama_indonesia dan deskripsi wajib diisi".to_owned())
        },
        other => ApiError::internal("Gagal memperbarui tanaman", other),
    })?;

    Ok(Json(MessageResponse { message: "Tanaman berhasil diperbarui" }))
}

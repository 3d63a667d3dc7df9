//! HTTP API server for flora.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;
mod response_types;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header, header::InvalidHeaderValue},
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use flora_core::{AppConfig, MAX_UPLOAD_BYTES};
use flora_predict::PredictClient;
use flora_service::{CategoryService, PlantService};
use flora_storage::{CategoryStore, PlantStore};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub plant_service: Arc<PlantService>,
    pub predictor: PredictClient,
    /// Prefix joined onto each plant's stored `image_path`.
    pub public_base_url: String,
}

impl AppState {
    /// Wire both services onto one storage backend.
    pub fn new<S>(
        storage: Arc<S>,
        predictor: PredictClient,
        public_base_url: impl Into<String>,
        plant_list_limit: usize,
    ) -> Self
    where
        S: CategoryStore + PlantStore + 'static,
    {
        let categories: Arc<dyn CategoryStore> = Arc::clone(&storage) as Arc<dyn CategoryStore>;
        let plants: Arc<dyn PlantStore> = storage;
        Self {
            category_service: Arc::new(CategoryService::new(categories)),
            plant_service: Arc::new(PlantService::new(plants, plant_list_limit)),
            predictor,
            public_base_url: public_base_url.into(),
        }
    }
}

/// Cross-origin settings and static file root for [`create_router`].
#[derive(Debug, Clone)]
pub struct RouterOptions<'a> {
    pub cors_origin: &'a str,
    pub dataset_dir: &'a Path,
}

impl<'a> From<&'a AppConfig> for RouterOptions<'a> {
    fn from(config: &'a AppConfig) -> Self {
        Self { cors_origin: &config.cors_origin, dataset_dir: &config.dataset_dir }
    }
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(handlers::categories::list_categories))
        .route("/categories/add", post(handlers::categories::add_category))
        .route(
            "/categories/{id}",
            get(handlers::categories::get_category)
                .put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .route("/plants", get(handlers::plants::list_plants))
        .route("/plants/add", post(handlers::plants::add_plant))
        .route("/plants/{id}", get(handlers::plants::get_plant).put(handlers::plants::update_plant))
        .route(
            "/predict",
            post(handlers::predict::predict).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}

/// Build the full application router.
///
/// # Errors
/// Returns an error when `cors_origin` is not a valid header value.
pub fn create_router(
    state: Arc<AppState>,
    options: RouterOptions<'_>,
) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(options.cors_origin)?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .nest_service("/dataset", ServeDir::new(options.dataset_dir))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn health() -> &'static str {
    "ok"
}

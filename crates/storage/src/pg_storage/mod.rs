//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod categories;
mod datasets;
mod plant_writes;
mod plants;
mod schema;

use std::time::Duration;

use flora_core::{
    Category, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PlantView,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect a pool of at most `max_connections` connections.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }

    /// Wrap a pool built elsewhere, e.g. with test-specific sizing.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) const CATEGORY_COLUMNS: &str = "id, nama_kategori";

/// Shared select list and joins of the plant read projection.
///
/// Category names are aggregated per plant, de-duplicated, and default to an
/// empty array when the plant has no links or no plant row exists yet.
pub(crate) const PLANT_VIEW_SELECT: &str = "
    SELECT dp.id AS dataset_id,
           dp.nama_tumbuhan::text AS nama_tumbuhan,
           dp.image_path::text AS image_path,
           p.id AS plant_id,
           p.nama_indonesia::text AS nama_indonesia,
           p.deskripsi::text AS deskripsi,
           COALESCE(k.kategori, ARRAY[]::text[]) AS kategori
    FROM datasetplants dp
    LEFT JOIN plants p ON p.dataset_id = dp.id
    LEFT JOIN (
        SELECT pc.plant_id, array_agg(DISTINCT c.nama_kategori::text) AS kategori
        FROM plantcategory pc
        JOIN categories c ON c.id = pc.category_id
        GROUP BY pc.plant_id
    ) k ON k.plant_id = p.id";

pub(crate) fn row_to_category(row: &PgRow) -> Result<Category, StorageError> {
    Ok(Category { id: row.try_get("id")?, name: row.try_get("nama_kategori")? })
}

pub(crate) fn row_to_plant_view(row: &PgRow) -> Result<PlantView, StorageError> {
    Ok(PlantView {
        dataset_id: row.try_get("dataset_id")?,
        scientific_name: row.try_get("nama_tumbuhan")?,
        image_path: row.try_get("image_path")?,
        plant_id: row.try_get("plant_id")?,
        local_name: row.try_get("nama_indonesia")?,
        description: row.try_get("deskripsi")?,
        categories: row.try_get("kategori")?,
    })
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

//! PlantReader implementation for PgStorage.

use super::*;

use crate::traits::PlantReader;
use async_trait::async_trait;

#[async_trait]
impl PlantReader for PgStorage {
    async fn list_plants(&self, limit: usize) -> Result<Vec<PlantView>, StorageError> {
        // DISTINCT ON keeps the first row per name; NULL plant ids sort last,
        // so a descriptor that has a plant always beats one that does not.
        let rows = sqlx::query(&format!(
            "SELECT DISTINCT ON (v.nama_tumbuhan) v.*
             FROM ({PLANT_VIEW_SELECT}) v
             ORDER BY v.nama_tumbuhan, v.plant_id, v.dataset_id
             LIMIT $1"
        ))
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_plant_view).collect()
    }

    async fn get_plant(&self, dataset_id: i32) -> Result<Option<PlantView>, StorageError> {
        let row = sqlx::query(&format!(
            "{PLANT_VIEW_SELECT}
             WHERE dp.id = $1
             ORDER BY p.id
             LIMIT 1"
        ))
        .bind(dataset_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_plant_view(&r)).transpose()
    }
}

//! Dataset descriptor ingestion used by the seeder.
//!
//! The request-serving code never writes `datasetplants`.

use super::*;

impl PgStorage {
    /// Insert a descriptor unless one with the same image path exists.
    /// Returns `true` when a row was inserted.
    pub async fn insert_dataset_descriptor(
        &self,
        scientific_name: &str,
        image_path: &str,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "INSERT INTO datasetplants (nama_tumbuhan, image_path) VALUES ($1, $2)
             ON CONFLICT (image_path) DO NOTHING",
        )
        .bind(scientific_name)
        .bind(image_path)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

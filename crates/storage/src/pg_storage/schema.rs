//! Idempotent bootstrap of the four catalog tables.
//!
//! Only creates what is missing; it never alters an existing table, so a
//! database created by earlier deployments is left as it is.

use super::*;

const SCHEMA_STATEMENTS: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS datasetplants (
        id SERIAL PRIMARY KEY,
        nama_tumbuhan VARCHAR(255) NOT NULL,
        image_path TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        nama_kategori VARCHAR(255) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS plants (
        id SERIAL PRIMARY KEY,
        dataset_id INTEGER NOT NULL REFERENCES datasetplants (id),
        nama_indonesia TEXT NOT NULL,
        deskripsi TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS plantcategory (
        plant_id INTEGER NOT NULL REFERENCES plants (id),
        category_id INTEGER NOT NULL REFERENCES categories (id) ON DELETE CASCADE,
        PRIMARY KEY (plant_id, category_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_datasetplants_name ON datasetplants (nama_tumbuhan)",
];

impl PgStorage {
    /// Create missing tables and indexes.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StorageError::Schema(e.to_string()))?;
        }
        tracing::info!("catalog schema ensured");
        Ok(())
    }
}

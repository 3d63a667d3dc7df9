//! CategoryStore implementation for PgStorage.

use super::*;

use crate::traits::CategoryStore;
use async_trait::async_trait;

#[async_trait]
impl CategoryStore for PgStorage {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_category).collect()
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_category(&r)).transpose()
    }

    async fn add_category(&self, name: &str) -> Result<Option<Category>, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO categories (nama_kategori) VALUES ($1)
             ON CONFLICT (nama_kategori) DO NOTHING
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        if row.is_none() {
            tracing::debug!(name, "category already exists");
        }
        row.map(|r| row_to_category(&r)).transpose()
    }

    async fn update_category(
        &self,
        id: i32,
        name: &str,
    ) -> Result<Option<Category>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE categories SET nama_kategori = $1 WHERE id = $2 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_category(&r)).transpose()
    }

    async fn delete_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        let row = sqlx::query(&format!(
            "DELETE FROM categories WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_category(&r)).transpose()
    }
}

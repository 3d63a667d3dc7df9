use async_trait::async_trait;
use flora_core::Category;

use crate::error::StorageError;

/// CRUD over the `categories` table.
///
/// Lookups that miss return `Ok(None)`; only storage failures are errors.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories in storage order.
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Get category by ID.
    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError>;

    /// Insert a category. Returns `None` when the name is already taken.
    async fn add_category(&self, name: &str) -> Result<Option<Category>, StorageError>;

    /// Rename a category. Returns `None` when the ID does not exist.
    async fn update_category(&self, id: i32, name: &str)
    -> Result<Option<Category>, StorageError>;

    /// Delete a category, returning the removed row.
    async fn delete_category(&self, id: i32) -> Result<Option<Category>, StorageError>;
}

use std::sync::Arc;

use flora_core::Category;
use flora_storage::CategoryStore;

use crate::ServiceError;

pub struct CategoryService {
    storage: Arc<dyn CategoryStore>,
}

/// Trimmed, non-blank category name.
fn normalize_name(name: &str) -> Result<&str, ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput("nama_kategori must not be blank".to_owned()));
    }
    Ok(trimmed)
}

impl CategoryService {
    #[must_use]
    pub fn new(storage: Arc<dyn CategoryStore>) -> Self {
        Self { storage }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.storage.list_categories().await?)
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
        Ok(self.storage.get_category(id).await?)
    }

    /// Fails with [`ServiceError::Conflict`] when the name is taken.
    pub async fn add_category(&self, name: &str) -> Result<Category, ServiceError> {
        let name = normalize_name(name)?;
        match self.storage.add_category(name).await? {
            Some(category) => {
                tracing::info!(id = category.id, name, "category added");
                Ok(category)
            },
            None => Err(ServiceError::Conflict(format!("category {name} already exists"))),
        }
    }

    pub async fn update_category(
        &self,
        id: i32,
        name: &str,
    ) -> Result<Option<Category>, ServiceError> {
        let name = normalize_name(name)?;
        match self.storage.update_category(id, name).await {
            Ok(updated) => Ok(updated),
            Err(e) if e.is_duplicate() => {
                Err(ServiceError::Conflict(format!("category {name} already exists")))
            },
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
        let removed = self.storage.delete_category(id).await?;
        if removed.is_some() {
            tracing::info!(id, "category deleted");
        }
        Ok(removed)
    }
}

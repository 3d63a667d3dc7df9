use async_trait::async_trait;
use flora_core::{NewPlant, PlantUpdate, PlantView};

use crate::error::StorageError;

/// Read projection over dataset descriptors, plants and their categories.
#[async_trait]
pub trait PlantReader: Send + Sync {
    /// One view per distinct scientific name, at most `limit` rows.
    ///
    /// When several plants share a name the one with the lowest plant ID wins.
    async fn list_plants(&self, limit: usize) -> Result<Vec<PlantView>, StorageError>;

    /// View for a single dataset descriptor ID.
    async fn get_plant(&self, dataset_id: i32) -> Result<Option<PlantView>, StorageError>;
}

/// Atomic writes of a plant row together with its category links.
#[async_trait]
pub trait PlantWriter: Send + Sync {
    /// Insert the plant and its links in one transaction. Returns the new plant ID.
    async fn create_plant(&self, plant: NewPlant) -> Result<i32, StorageError>;

    /// Update the plant and replace its whole link set in one transaction.
    async fn update_plant(&self, id: i32, update: PlantUpdate) -> Result<(), StorageError>;
}

/// Everything the plant service needs from storage.
pub trait PlantStore: PlantReader + PlantWriter {}

impl<T: PlantReader + PlantWriter> PlantStore for T {}

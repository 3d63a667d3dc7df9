use std::sync::Arc;

use flora_core::{NewPlant, PlantUpdate, PlantView};
use flora_storage::PlantStore;

use crate::ServiceError;

pub struct PlantService {
    storage: Arc<dyn PlantStore>,
    list_limit: usize,
}

fn require_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(())
}

impl PlantService {
    #[must_use]
    pub fn new(storage: Arc<dyn PlantStore>, list_limit: usize) -> Self {
        Self { storage, list_limit }
    }

    /// One row per scientific name, at most `list_limit` rows.
    pub async fn list_plants(&self) -> Result<Vec<PlantView>, ServiceError> {
        Ok(self.storage.list_plants(self.list_limit).await?)
    }

    pub async fn get_plant(&self, dataset_id: i32) -> Result<Option<PlantView>, ServiceError> {
        Ok(self.storage.get_plant(dataset_id).await?)
    }

    pub async fn create_plant(&self, plant: NewPlant) -> Result<i32, ServiceError> {
        if plant.dataset_id <= 0 {
            return Err(ServiceError::InvalidInput("dataset_id must be positive".to_owned()));
        }
        require_text("nama_indonesia", &plant.local_name)?;
        require_text("deskripsi", &plant.description)?;

        let dataset_id = plant.dataset_id;
        let links = plant.category_ids.len();
        let plant_id = self.storage.create_plant(plant).await?;
        tracing::info!(plant_id, dataset_id, links, "plant added");
        Ok(plant_id)
    }

    /// Replace the editable fields and the full category set of a plant.
    pub async fn update_plant(&self, id: i32, update: PlantUpdate) -> Result<(), ServiceError> {
        require_text("nama_indonesia", &update.local_name)?;
        require_text("deskripsi", &update.description)?;

        let links = update.category_ids.len();
        self.storage.update_plant(id, update).await?;
        tracing::info!(plant_id = id, links, "plant updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use flora_storage::{CategoryStore, MemoryStorage};

    use super::*;

    async fn service(limit: usize) -> (Arc<MemoryStorage>, PlantService) {
        let storage = Arc::new(MemoryStorage::new());
        for name in ["Obat", "Hias"] {
            storage.add_category(name).await.unwrap();
        }
        storage.insert_dataset(1, "Curcuma longa", "dataset/train/Curcuma longa/1.jpg").await;
        storage.insert_dataset(2, "Curcuma longa", "dataset/train/Curcuma longa/2.jpg").await;
        storage.insert_dataset(3, "Aloe vera", "dataset/train/Aloe vera/1.jpg").await;
        (Arc::clone(&storage), PlantService::new(storage, limit))
    }

    fn new_plant(dataset_id: i32, local_name: &str, category_ids: Vec<i32>) -> NewPlant {
        NewPlant {
            dataset_id,
            local_name: local_name.to_owned(),
            description: "Rimpang untuk jamu".to_owned(),
            category_ids,
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let (_, svc) = service(52).await;
        for plant in [
            new_plant(0, "Kunyit", vec![]),
            new_plant(1, "  ", vec![]),
            NewPlant { description: String::new(), ..new_plant(1, "Kunyit", vec![]) },
        ] {
            let err = svc.create_plant(plant).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn create_then_get_shows_categories() {
        let (_, svc) = service(52).await;
        let plant_id = svc.create_plant(new_plant(1, "Kunyit", vec![2, 1, 2])).await.unwrap();

        let view = svc.get_plant(1).await.unwrap().unwrap();
        assert_eq!(view.plant_id, Some(plant_id));
        assert_eq!(view.local_name.as_deref(), Some("Kunyit"));
        assert_eq!(view.categories, vec!["Hias".to_owned(), "Obat".to_owned()]);
    }

    #[tokio::test]
    async fn unknown_category_leaves_nothing_behind() {
        let (storage, svc) = service(52).await;
        let err = svc.create_plant(new_plant(1, "Kunyit", vec![1, 42])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(ref e) if e.is_foreign_key()));

        let view = svc.get_plant(1).await.unwrap().unwrap();
        assert_eq!(view.plant_id, None);
        assert_eq!(storage.plant_row(1).await, None);
    }

    #[tokio::test]
    async fn update_with_empty_ids_clears_links() {
        let (storage, svc) = service(52).await;
        let plant_id = svc.create_plant(new_plant(3, "Lidah buaya", vec![1, 2])).await.unwrap();

        let update = PlantUpdate {
            local_name: "Lidah buaya".to_owned(),
            description: "Gel daun".to_owned(),
            category_ids: vec![],
        };
        svc.update_plant(plant_id, update).await.unwrap();
        assert!(storage.linked_category_ids(plant_id).await.is_empty());
        assert_eq!(storage.plant_row(plant_id).await.unwrap().description, "Gel daun");
    }

    #[tokio::test]
    async fn update_rejects_blank_description() {
        let (_, svc) = service(52).await;
        let update = PlantUpdate {
            local_name: "Lidah buaya".to_owned(),
            description: " ".to_owned(),
            category_ids: vec![1],
        };
        let err = svc.update_plant(1, update).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn list_respects_configured_limit() {
        let (_, svc) = service(1).await;
        let rows = svc.list_plants().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].scientific_name, "Aloe vera");

        let (_, svc) = service(52).await;
        let names: Vec<String> =
            svc.list_plants().await.unwrap().into_iter().map(|v| v.scientific_name).collect();
        assert_eq!(names, vec!["Aloe vera".to_owned(), "Curcuma longa".to_owned()]);
    }
}

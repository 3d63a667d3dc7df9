//! Test utilities and module declarations for storage tests.

use crate::MemoryStorage;
use flora_core::{NewPlant, PlantUpdate};

/// Storage with three categories (ids 1..=3) and descriptors:
/// 10 and 11 share "Ficus elastica", 12 is "Zingiber officinale".
pub async fn seeded_storage() -> MemoryStorage {
    use crate::CategoryStore;

    let storage = MemoryStorage::new();
    for name in ["Obat", "Hias", "Pangan"] {
        storage.add_category(name).await.unwrap();
    }
    storage.insert_dataset(10, "Ficus elastica", "dataset/train/Ficus elastica/a.jpg").await;
    storage.insert_dataset(11, "Ficus elastica", "dataset/train/Ficus elastica/b.jpg").await;
    storage.insert_dataset(12, "Zingiber officinale", "dataset/train/Zingiber officinale/a.jpg").await;
    storage
}

pub fn new_plant(dataset_id: i32, category_ids: Vec<i32>) -> NewPlant {
    NewPlant {
        dataset_id,
        local_name: "Karet kebo".to_owned(),
        description: "Pohon besar bergetah".to_owned(),
        category_ids,
    }
}

pub fn plant_update(category_ids: Vec<i32>) -> PlantUpdate {
    PlantUpdate {
        local_name: "Karet".to_owned(),
        description: "Deskripsi baru".to_owned(),
        category_ids,
    }
}

mod transaction_tests;

//! In-memory implementation of the storage traits.
//!
//! Mirrors the PostgreSQL behaviour that callers rely on: unique category
//! names, foreign keys on links, distinct-on-name projection, and
//! all-or-nothing plant writes (each write mutates a copy of the state and
//! swaps it in only on success).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use flora_core::{Category, NewPlant, PlantUpdate, PlantView, unique_category_ids};
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::traits::{CategoryStore, PlantReader, PlantWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRow {
    pub dataset_id: i32,
    pub local_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
struct State {
    categories: BTreeMap<i32, String>,
    datasets: BTreeMap<i32, (String, String)>,
    plants: BTreeMap<i32, PlantRow>,
    links: BTreeSet<(i32, i32)>,
    next_category_id: i32,
    next_plant_id: i32,
}

impl State {
    fn insert_links(&mut self, plant_id: i32, category_ids: &[i32]) -> Result<(), StorageError> {
        for category_id in unique_category_ids(category_ids) {
            if !self.plants.contains_key(&plant_id) {
                return Err(StorageError::ForeignKey(format!("plant {plant_id} does not exist")));
            }
            if !self.categories.contains_key(&category_id) {
                return Err(StorageError::ForeignKey(format!(
                    "category {category_id} does not exist"
                )));
            }
            self.links.insert((plant_id, category_id));
        }
        Ok(())
    }

    fn category_names(&self, plant_id: i32) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .links
            .iter()
            .filter(|(p, _)| *p == plant_id)
            .filter_map(|(_, c)| self.categories.get(c))
            .collect();
        names.into_iter().cloned().collect()
    }

    /// Candidate rows for one descriptor, lowest plant id first, descriptor
    /// without a plant last.
    fn views_for_dataset(&self, dataset_id: i32) -> Vec<PlantView> {
        let Some((name, path)) = self.datasets.get(&dataset_id) else {
            return Vec::new();
        };
        let base = PlantView {
            dataset_id,
            scientific_name: name.clone(),
            image_path: path.clone(),
            plant_id: None,
            local_name: None,
            description: None,
            categories: Vec::new(),
        };
        let views: Vec<PlantView> = self
            .plants
            .iter()
            .filter(|(_, row)| row.dataset_id == dataset_id)
            .map(|(id, row)| PlantView {
                plant_id: Some(*id),
                local_name: Some(row.local_name.clone()),
                description: Some(row.description.clone()),
                categories: self.category_names(*id),
                ..base.clone()
            })
            .collect();
        if views.is_empty() { vec![base] } else { views }
    }
}

/// Storage double for service and HTTP tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
    fail_link_inserts: AtomicBool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent link insert fail after the plant row was written.
    pub fn set_fail_link_inserts(&self, fail: bool) {
        self.fail_link_inserts.store(fail, Ordering::SeqCst);
    }

    /// Register a dataset descriptor, the way the seeder would.
    pub async fn insert_dataset(&self, id: i32, scientific_name: &str, image_path: &str) {
        self.state
            .lock()
            .await
            .datasets
            .insert(id, (scientific_name.to_owned(), image_path.to_owned()));
    }

    /// Category ids currently linked to `plant_id`, ascending.
    pub async fn linked_category_ids(&self, plant_id: i32) -> Vec<i32> {
        let state = self.state.lock().await;
        state.links.iter().filter(|(p, _)| *p == plant_id).map(|(_, c)| *c).collect()
    }

    pub async fn plant_row(&self, plant_id: i32) -> Option<PlantRow> {
        self.state.lock().await.plants.get(&plant_id).cloned()
    }

    pub async fn category_count(&self) -> usize {
        self.state.lock().await.categories.len()
    }

    fn check_link_failure(&self, category_ids: &[i32]) -> Result<(), StorageError> {
        if !category_ids.is_empty() && self.fail_link_inserts.load(Ordering::SeqCst) {
            return Err(StorageError::ForeignKey("injected link insert failure".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for MemoryStorage {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let state = self.state.lock().await;
        Ok(state.categories.iter().map(|(id, name)| Category::new(*id, name.clone())).collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        let state = self.state.lock().await;
        Ok(state.categories.get(&id).map(|name| Category::new(id, name.clone())))
    }

    async fn add_category(&self, name: &str) -> Result<Option<Category>, StorageError> {
        let mut state = self.state.lock().await;
        if state.categories.values().any(|existing| existing == name) {
            return Ok(None);
        }
        state.next_category_id += 1;
        let id = state.next_category_id;
        state.categories.insert(id, name.to_owned());
        Ok(Some(Category::new(id, name)))
    }

    async fn update_category(
        &self,
        id: i32,
        name: &str,
    ) -> Result<Option<Category>, StorageError> {
        let mut state = self.state.lock().await;
        if !state.categories.contains_key(&id) {
            return Ok(None);
        }
        if state.categories.iter().any(|(other, existing)| *other != id && existing == name) {
            return Err(StorageError::Duplicate(format!("category name {name} already exists")));
        }
        state.categories.insert(id, name.to_owned());
        Ok(Some(Category::new(id, name)))
    }

    async fn delete_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        let mut state = self.state.lock().await;
        let removed = state.categories.remove(&id);
        if removed.is_some() {
            state.links.retain(|(_, c)| *c != id);
        }
        Ok(removed.map(|name| Category::new(id, name)))
    }
}

#[async_trait]
impl PlantReader for MemoryStorage {
    async fn list_plants(&self, limit: usize) -> Result<Vec<PlantView>, StorageError> {
        let state = self.state.lock().await;
        let mut by_name: BTreeMap<&str, Vec<PlantView>> = BTreeMap::new();
        for (id, (name, _)) in &state.datasets {
            by_name.entry(name.as_str()).or_default().extend(state.views_for_dataset(*id));
        }
        Ok(by_name
            .into_values()
            .filter_map(|mut candidates| {
                candidates.sort_by_key(|v| (v.plant_id.is_none(), v.plant_id, v.dataset_id));
                candidates.into_iter().next()
            })
            .take(limit)
            .collect())
    }

    async fn get_plant(&self, dataset_id: i32) -> Result<Option<PlantView>, StorageError> {
        let state = self.state.lock().await;
        Ok(state.views_for_dataset(dataset_id).into_iter().next())
    }
}

#[async_trait]
impl PlantWriter for MemoryStorage {
    async fn create_plant(&self, plant: NewPlant) -> Result<i32, StorageError> {
        let mut state = self.state.lock().await;
        if !state.datasets.contains_key(&plant.dataset_id) {
            return Err(StorageError::ForeignKey(format!(
                "dataset {} does not exist",
                plant.dataset_id
            )));
        }
        let mut work = state.clone();
        work.next_plant_id += 1;
        let plant_id = work.next_plant_id;
        work.plants.insert(
            plant_id,
            PlantRow {
                dataset_id: plant.dataset_id,
                local_name: plant.local_name,
                description: plant.description,
            },
        );
        self.check_link_failure(&plant.category_ids)?;
        work.insert_links(plant_id, &plant.category_ids)?;
        *state = work;
        Ok(plant_id)
    }

    async fn update_plant(&self, id: i32, update: PlantUpdate) -> Result<(), StorageError> {
        let mut state = self.state.lock().await;
        let mut work = state.clone();
        if let Some(row) = work.plants.get_mut(&id) {
            row.local_name = update.local_name;
            row.description = update.description;
        }
        work.links.retain(|(p, _)| *p != id);
        self.check_link_failure(&update.category_ids)?;
        work.insert_links(id, &update.category_ids)?;
        *state = work;
        Ok(())
    }
}

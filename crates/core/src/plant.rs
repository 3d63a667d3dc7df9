//! Plant types: the joined read view and the write inputs.

use serde::{Deserialize, Serialize};

/// Read projection of a dataset descriptor, its plant enrichment, and the
/// names of the categories linked to that plant.
///
/// `plant_id`, `local_name` and `description` are absent when no plant row
/// has been created for the descriptor yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantView {
    pub dataset_id: i32,
    #[serde(rename = "nama_tumbuhan")]
    pub scientific_name: String,
    /// Storage-relative path; the HTTP layer turns it into a public URL.
    pub image_path: String,
    pub plant_id: Option<i32>,
    #[serde(rename = "nama_indonesia")]
    pub local_name: Option<String>,
    #[serde(rename = "deskripsi")]
    pub description: Option<String>,
    #[serde(rename = "kategori")]
    pub categories: Vec<String>,
}

impl PlantView {
    /// Replace the relative image path with `{base_url}/{image_path}`.
    #[must_use]
    pub fn with_image_base(mut self, base_url: &str) -> Self {
        self.image_path = format!("{}/{}", base_url.trim_end_matches('/'), self.image_path);
        self
    }
}

/// Input for inserting a plant row and its category links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlant {
    pub dataset_id: i32,
    pub local_name: String,
    pub description: String,
    pub category_ids: Vec<i32>,
}

/// Input for replacing a plant's editable fields and its full link set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantUpdate {
    pub local_name: String,
    pub description: String,
    pub category_ids: Vec<i32>,
}

/// Category ids in first-seen order with repeats removed.
///
/// The link table is keyed by `(plant_id, category_id)`, so a repeated id
/// collapses into a single link.
pub fn unique_category_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

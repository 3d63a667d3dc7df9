use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub nama_kategori: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddPlantRequest {
    #[serde(default)]
    pub dataset_id: Option<i32>,
    #[serde(default)]
    pub nama_indonesia: Option<String>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    /// Absent and `null` both mean "no categories".
    #[serde(default)]
    pub category_ids: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlantRequest {
    #[serde(default)]
    pub nama_indonesia: Option<String>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub category_ids: Option<Vec<i32>>,
}

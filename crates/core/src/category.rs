use serde::{Deserialize, Serialize};

/// A row of the `categories` table.
///
/// Serialized with the column names the public API has always exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nama_kategori")]
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

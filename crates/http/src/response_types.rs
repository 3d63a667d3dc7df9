use serde::Serialize;

/// `{"success": true, "data": ...}`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// `{"success": true, "message": ...}`
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlantCreatedResponse {
    pub message: &'static str,
    #[serde(rename = "plantId")]
    pub plant_id: i32,
}

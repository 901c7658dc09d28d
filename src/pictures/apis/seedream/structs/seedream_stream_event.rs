use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedreamStreamEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub b64_json: Option<String>,
    pub partial_image_index: Option<u8>,
    pub url: Option<String>,
    pub size: Option<String>,
    pub error: Option<SeedreamStreamError>,
    pub usage: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedreamStreamError {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl SeedreamStreamEvent {
    pub const PARTIAL_IMAGE: &'static str = "image_generation.partial_image";
    pub const PARTIAL_SUCCEEDED: &'static str = "image_generation.partial_succeeded";
    pub const PARTIAL_FAILED: &'static str = "image_generation.partial_failed";
    pub const COMPLETED: &'static str = "image_generation.completed";
}

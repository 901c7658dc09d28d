use axum::response::sse::Event;
use serde_json::json;

use crate::pictures::{errors::PictureApiError, models::generated_image::GeneratedImage};

/// One unit of the outbound stream: a generated image, or exactly one
/// terminal event.
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    Image(GeneratedImage),
    Completed { total: u8 },
    Failed(PictureApiError),
}

impl GenerationEvent {
    pub fn to_sse_event(&self) -> Event {
        let payload = match self {
            Self::Image(image) => json!({
                "index": image.index,
                "base64": image.base64,
            }),
            Self::Completed { total } => json!({
                "status": "completed",
                "total": total,
            }),
            Self::Failed(e) => json!({
                "status": "failed",
                "error": e.kind(),
                "message": e.message(),
            }),
        };

        match Event::default().json_data(&payload) {
            Ok(event) => event,
            Err(_) => Event::default().data("{}"),
        }
    }
}

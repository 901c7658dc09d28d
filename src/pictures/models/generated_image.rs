use serde::{Deserialize, Serialize};

/// One output unit of a generation run: a receipt-order index (0-based,
/// at most four per run) and a data-URL encoded image payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub index: u8,
    pub base64: String,
}

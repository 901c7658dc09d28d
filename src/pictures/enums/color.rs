use serde::{Deserialize, Serialize};

use crate::pictures::prompt::templates::AI_RANDOM_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Warm,
    Cold,
    Neutral,
    #[serde(rename = "AIRandom")]
    AiRandom,
}

impl Color {
    pub fn label(&self) -> &'static str {
        match *self {
            Self::Warm => "warm tones",
            Self::Cold => "cold tones",
            Self::Neutral => "neutral tones",
            Self::AiRandom => AI_RANDOM_LABEL,
        }
    }
}

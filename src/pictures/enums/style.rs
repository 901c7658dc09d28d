use serde::{Deserialize, Serialize};

use crate::pictures::prompt::templates::AI_RANDOM_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    FrenchElegant,
    JapaneseSimple,
    FutureTech,
    #[serde(rename = "AIRandom")]
    AiRandom,
}

impl Style {
    pub fn label(&self) -> &'static str {
        match *self {
            Self::FrenchElegant => "French elegant",
            Self::JapaneseSimple => "Japanese minimalist",
            Self::FutureTech => "futuristic tech",
            Self::AiRandom => AI_RANDOM_LABEL,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::pictures::prompt::templates::AI_RANDOM_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarmentType {
    Suit,
    Dress,
    Coat,
    LocalCostume,
    #[serde(rename = "AIRandom")]
    AiRandom,
}

impl GarmentType {
    pub fn label(&self) -> &'static str {
        match *self {
            Self::Suit => "a matching suit",
            Self::Dress => "a dress",
            Self::Coat => "a coat",
            Self::LocalCostume => "a local traditional costume",
            Self::AiRandom => AI_RANDOM_LABEL,
        }
    }
}

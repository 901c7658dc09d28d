use serde::{Deserialize, Serialize};

use crate::pictures::prompt::templates::AI_RANDOM_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Denim,
    Silk,
    Cotton,
    Metal,
    #[serde(rename = "AIRandom")]
    AiRandom,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match *self {
            Self::Denim => "denim",
            Self::Silk => "silk",
            Self::Cotton => "cotton",
            Self::Metal => "metallic",
            Self::AiRandom => AI_RANDOM_LABEL,
        }
    }
}

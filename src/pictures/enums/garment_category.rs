use serde::{Deserialize, Serialize};

use crate::pictures::enums::gender::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GarmentCategory {
    MaleTop,
    MaleBottom,
    FemaleTop,
    FemaleBottom,
    Dress,
}

impl GarmentCategory {
    pub fn top_for(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::MaleTop,
            Gender::Female => Self::FemaleTop,
        }
    }

    pub fn bottom_for(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::MaleBottom,
            Gender::Female => Self::FemaleBottom,
        }
    }
}

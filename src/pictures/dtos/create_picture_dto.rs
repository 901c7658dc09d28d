use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pictures::enums::{
    city::City, color::Color, garment_type::GarmentType, gender::Gender, material::Material,
    mode::Mode, style::Style,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePictureDto {
    #[serde(rename = "originPicBase64")]
    #[validate(length(min = 1, message = "originPicBase64 must not be empty."))]
    pub origin_pic_base64: String,
    pub city: City,
    pub gender: Gender,
    pub mode: Mode,
    pub clothes: Option<ClothesDto>,
    pub master_mode_tags: Option<MasterModeTagsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothesDto {
    #[serde(rename = "upperStyle")]
    pub upper_style: Option<u16>,
    #[serde(rename = "lowerStyle")]
    pub lower_style: Option<u16>,
    pub dress: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterModeTagsDto {
    pub style: Option<Style>,
    pub material: Option<Material>,
    pub color: Option<Color>,
    #[serde(rename = "type")]
    pub garment_type: Option<GarmentType>,
}

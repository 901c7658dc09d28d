use crate::pictures::{
    dtos::create_picture_dto::{ClothesDto, CreatePictureDto},
    enums::{
        city::City, color::Color, garment_category::GarmentCategory, garment_type::GarmentType,
        gender::Gender, material::Material, mode::Mode, style::Style,
    },
    errors::PictureApiError,
};

/// A fully validated generation request. Constructed once per inbound
/// request and immutable afterwards; never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub origin_pic_base64: String,
    pub city: City,
    pub gender: Gender,
    pub mode: Mode,
    pub clothes: Option<ClothingSelection>,
    pub master_mode_tags: Option<MasterModeTags>,
}

#[derive(Debug, Clone)]
pub struct ClothingSelection {
    pub items: Vec<GarmentItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GarmentItem {
    pub category: GarmentCategory,
    pub style_id: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct MasterModeTags {
    pub style: Option<Style>,
    pub material: Option<Material>,
    pub color: Option<Color>,
    pub garment_type: Option<GarmentType>,
}

impl ClothingSelection {
    pub fn upper(&self) -> Option<u16> {
        self.style_id_for(&[GarmentCategory::MaleTop, GarmentCategory::FemaleTop])
    }

    pub fn lower(&self) -> Option<u16> {
        self.style_id_for(&[GarmentCategory::MaleBottom, GarmentCategory::FemaleBottom])
    }

    pub fn dress(&self) -> Option<u16> {
        self.style_id_for(&[GarmentCategory::Dress])
    }

    fn style_id_for(&self, categories: &[GarmentCategory]) -> Option<u16> {
        self.items
            .iter()
            .find(|item| categories.contains(&item.category))
            .map(|item| item.style_id)
    }
}

impl GenerationRequest {
    /// Validation order is deterministic: (1) required-field presence per
    /// mode, (2) mutual exclusivity, (3) gender/category consistency,
    /// (4) pairing completeness, (5) duplicate detection. The first
    /// violation wins.
    pub fn from_dto(dto: &CreatePictureDto) -> Result<Self, PictureApiError> {
        // (1) required-field presence per mode
        if dto.origin_pic_base64.trim().is_empty() {
            return Err(PictureApiError::Validation(
                "An origin picture is required.".to_string(),
            ));
        }

        let clothes = match dto.mode {
            Mode::Easy => {
                let Some(clothes) = &dto.clothes
                else {
                    return Err(PictureApiError::Validation(
                        "Easy mode requires a clothes selection.".to_string(),
                    ));
                };

                if clothes.upper_style.is_none()
                    && clothes.lower_style.is_none()
                    && clothes.dress.is_none()
                {
                    return Err(PictureApiError::Validation(
                        "At least one garment must be selected.".to_string(),
                    ));
                }

                // (2) clothes/tags mutual exclusivity
                if dto.master_mode_tags.is_some() {
                    return Err(PictureApiError::Validation(
                        "Easy mode must not include master mode tags.".to_string(),
                    ));
                }

                // (2) a dress excludes any top/bottom garment
                if clothes.dress.is_some()
                    && (clothes.upper_style.is_some() || clothes.lower_style.is_some())
                {
                    return Err(PictureApiError::Validation(
                        "A dress cannot be combined with an upper or lower garment.".to_string(),
                    ));
                }

                // (3) gender/category consistency
                if dto.gender == Gender::Male && clothes.dress.is_some() {
                    return Err(PictureApiError::Validation(
                        "A dress cannot be selected for a male request.".to_string(),
                    ));
                }

                // (4) pairing completeness: tops and bottoms come in pairs
                if clothes.dress.is_none() {
                    if clothes.upper_style.is_some() && clothes.lower_style.is_none() {
                        return Err(PictureApiError::Validation(
                            "An upper garment must be paired with a lower garment.".to_string(),
                        ));
                    }
                    if clothes.lower_style.is_some() && clothes.upper_style.is_none() {
                        return Err(PictureApiError::Validation(
                            "A lower garment must be paired with an upper garment.".to_string(),
                        ));
                    }
                }

                Some(Self::build_selection(dto.gender, clothes)?)
            }
            Mode::Master => {
                if dto.master_mode_tags.is_none() {
                    return Err(PictureApiError::Validation(
                        "Master mode requires master mode tags.".to_string(),
                    ));
                }

                // (2) clothes/tags mutual exclusivity
                if dto.clothes.is_some() {
                    return Err(PictureApiError::Validation(
                        "Master mode must not include a clothes selection.".to_string(),
                    ));
                }

                None
            }
        };

        let master_mode_tags = dto.master_mode_tags.as_ref().map(|tags| MasterModeTags {
            style: tags.style,
            material: tags.material,
            color: tags.color,
            garment_type: tags.garment_type,
        });

        Ok(Self {
            origin_pic_base64: dto.origin_pic_base64.to_string(),
            city: dto.city,
            gender: dto.gender,
            mode: dto.mode,
            clothes,
            master_mode_tags,
        })
    }

    fn build_selection(
        gender: Gender,
        clothes: &ClothesDto,
    ) -> Result<ClothingSelection, PictureApiError> {
        let mut items: Vec<GarmentItem> = Vec::with_capacity(2);

        if let Some(style_id) = clothes.dress {
            Self::push_item(&mut items, GarmentCategory::Dress, style_id)?;
        } else {
            if let Some(style_id) = clothes.upper_style {
                Self::push_item(&mut items, GarmentCategory::top_for(gender), style_id)?;
            }
            if let Some(style_id) = clothes.lower_style {
                Self::push_item(&mut items, GarmentCategory::bottom_for(gender), style_id)?;
            }
        }

        Ok(ClothingSelection { items })
    }

    // (5) duplicate detection
    fn push_item(
        items: &mut Vec<GarmentItem>,
        category: GarmentCategory,
        style_id: u16,
    ) -> Result<(), PictureApiError> {
        if items.iter().any(|item| item.category == category) {
            return Err(PictureApiError::Validation(
                "Duplicate garment categories in one selection.".to_string(),
            ));
        }

        items.push(GarmentItem { category, style_id });
        Ok(())
    }
}

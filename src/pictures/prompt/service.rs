use crate::pictures::{
    enums::{city::City, mode::Mode},
    models::generation_request::{GenerationRequest, MasterModeTags},
};

use super::templates::{
    AI_RANDOM_LABEL, BASE_PROMPT_TEMPLATE, CITY_SCENES, EASY_CLOTHING_TEMPLATE,
    MASTER_CLOTHING_TEMPLATE,
};

/// Maps a validated request to its final prompt. Deterministic: the same
/// request always yields the same string. The mode match is closed, so an
/// unknown strategy is unrepresentable.
pub fn assemble(request: &GenerationRequest) -> String {
    let clothing_description = match request.mode {
        Mode::Easy => EASY_CLOTHING_TEMPLATE.to_string(),
        Mode::Master => master_clothing_description(request.master_mode_tags.as_ref()),
    };

    BASE_PROMPT_TEMPLATE
        .replace("{scene_description}", &scene_description(request.city))
        .replace("{clothing_description}", &clothing_description)
        .trim()
        .to_string()
}

fn scene_description(city: City) -> String {
    match CITY_SCENES.get(&city) {
        Some(scene) => scene.to_string(),
        None => format!(
            "Background scene: landmark of {}, four random scenes.",
            city.name()
        ),
    }
}

fn master_clothing_description(tags: Option<&MasterModeTags>) -> String {
    let Some(tags) = tags
    else {
        return format!("Person's clothing style: {}.", AI_RANDOM_LABEL);
    };

    // each axis independently falls back to the AI-random sentinel
    let style = tags.style.map_or(AI_RANDOM_LABEL, |v| v.label());
    let material = tags.material.map_or(AI_RANDOM_LABEL, |v| v.label());
    let color = tags.color.map_or(AI_RANDOM_LABEL, |v| v.label());
    let garment_type = tags.garment_type.map_or(AI_RANDOM_LABEL, |v| v.label());

    MASTER_CLOTHING_TEMPLATE
        .replace("{style}", style)
        .replace("{material}", material)
        .replace("{color}", color)
        .replace("{type}", garment_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictures::{
        dtos::create_picture_dto::{ClothesDto, CreatePictureDto, MasterModeTagsDto},
        enums::{
            color::Color, garment_type::GarmentType, gender::Gender, material::Material,
            style::Style,
        },
    };

    fn easy_request(city: City) -> GenerationRequest {
        GenerationRequest::from_dto(&CreatePictureDto {
            origin_pic_base64: "data:image/jpeg;base64,AAAA".to_string(),
            city,
            gender: Gender::Male,
            mode: Mode::Easy,
            clothes: Some(ClothesDto {
                upper_style: Some(101),
                lower_style: Some(201),
                dress: None,
            }),
            master_mode_tags: None,
        })
        .unwrap()
    }

    fn master_request(tags: MasterModeTagsDto) -> GenerationRequest {
        GenerationRequest::from_dto(&CreatePictureDto {
            origin_pic_base64: "data:image/jpeg;base64,AAAA".to_string(),
            city: City::Paris,
            gender: Gender::Female,
            mode: Mode::Master,
            clothes: None,
            master_mode_tags: Some(tags),
        })
        .unwrap()
    }

    #[test]
    fn assembly_is_deterministic() {
        let request = easy_request(City::Tokyo);
        assert_eq!(assemble(&request), assemble(&request));
    }

    #[test]
    fn easy_prompt_contains_scene_and_garment_clause() {
        let prompt = assemble(&easy_request(City::Tokyo));
        assert!(prompt.contains("Shibuya"));
        assert!(prompt.contains("provided garment images"));
        assert!(!prompt.contains("{scene_description}"));
        assert!(!prompt.contains("{clothing_description}"));
    }

    #[test]
    fn city_missing_from_scene_table_falls_back_to_a_generated_sentence() {
        // Kuala Lumpur has no curated scene entry
        let prompt = assemble(&easy_request(City::KualaLumpur));
        assert!(prompt.contains("landmark of Kuala Lumpur"));
        assert!(prompt.contains("four random scenes"));
    }

    #[test]
    fn master_prompt_resolves_every_axis_label() {
        let prompt = assemble(&master_request(MasterModeTagsDto {
            style: Some(Style::FrenchElegant),
            material: Some(Material::Silk),
            color: Some(Color::Neutral),
            garment_type: Some(GarmentType::Suit),
        }));

        assert!(prompt.contains("French elegant"));
        assert!(prompt.contains("silk"));
        assert!(prompt.contains("neutral tones"));
        assert!(prompt.contains("a matching suit"));
    }

    #[test]
    fn unset_master_axes_fall_back_to_the_sentinel() {
        let prompt = assemble(&master_request(MasterModeTagsDto {
            style: None,
            material: Some(Material::Denim),
            color: None,
            garment_type: None,
        }));

        assert!(prompt.contains("denim"));
        assert!(prompt.contains(AI_RANDOM_LABEL));
    }

    #[test]
    fn explicit_ai_random_values_use_the_sentinel_label() {
        let prompt = assemble(&master_request(MasterModeTagsDto {
            style: Some(Style::AiRandom),
            material: Some(Material::AiRandom),
            color: Some(Color::AiRandom),
            garment_type: Some(GarmentType::AiRandom),
        }));

        assert!(prompt.contains(AI_RANDOM_LABEL));
    }
}

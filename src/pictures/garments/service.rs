use std::path::Path;

use crate::pictures::{
    enums::{garment_category::GarmentCategory, gender::Gender},
    errors::PictureApiError,
    util::image,
};

use super::catalog::GarmentCatalog;

/// Resolves a clothing selection to transport-encoded garment images.
/// Called only in Easy mode. Order is fixed: dress first if present,
/// otherwise upper then lower.
pub async fn resolve_garment_images(
    gender: Gender,
    upper_style: Option<u16>,
    lower_style: Option<u16>,
    dress_style: Option<u16>,
    catalog: &GarmentCatalog,
) -> Result<Vec<String>, PictureApiError> {
    // upstream validation already enforced these; re-check before touching
    // the filesystem
    match gender {
        Gender::Male => {
            if dress_style.is_some() {
                return Err(PictureApiError::ParameterInvalid(
                    "A male selection cannot include a dress.".to_string(),
                ));
            }
            if upper_style.is_none() || lower_style.is_none() {
                return Err(PictureApiError::ParameterInvalid(
                    "A male selection requires both an upper and a lower garment.".to_string(),
                ));
            }
        }
        Gender::Female => {
            let has_pair = upper_style.is_some() && lower_style.is_some();
            let has_dress = dress_style.is_some();
            if has_dress && (upper_style.is_some() || lower_style.is_some()) {
                return Err(PictureApiError::ParameterInvalid(
                    "A dress cannot be combined with an upper or lower garment.".to_string(),
                ));
            }
            if !has_pair && !has_dress {
                return Err(PictureApiError::ParameterInvalid(
                    "A female selection requires either an upper/lower pair or a dress."
                        .to_string(),
                ));
            }
        }
    }

    let mut images = Vec::with_capacity(2);

    if let Some(style_id) = dress_style {
        images.push(load_garment(gender, GarmentCategory::Dress, style_id, catalog).await?);
    } else {
        if let Some(style_id) = upper_style {
            images.push(
                load_garment(gender, GarmentCategory::top_for(gender), style_id, catalog).await?,
            );
        }
        if let Some(style_id) = lower_style {
            images.push(
                load_garment(
                    gender,
                    GarmentCategory::bottom_for(gender),
                    style_id,
                    catalog,
                )
                .await?,
            );
        }
    }

    Ok(images)
}

async fn load_garment(
    gender: Gender,
    category: GarmentCategory,
    style_id: u16,
    catalog: &GarmentCatalog,
) -> Result<String, PictureApiError> {
    let Some(filename) = catalog.filename(gender, category, style_id)
    else {
        return Err(PictureApiError::ParameterInvalid(format!(
            "Unknown garment style id {} for {:?}.",
            style_id, category
        )));
    };

    let path = catalog.path_for(filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("garment image missing at {}: {}", path.display(), e);
            return Err(PictureApiError::ResourceNotFound(format!(
                "Garment image for style id {} is not available.",
                style_id
            )));
        }
    };

    Ok(image::encode_data_url(format_for(&path), &bytes))
}

fn format_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "png",
        _ => "jpeg",
    }
}

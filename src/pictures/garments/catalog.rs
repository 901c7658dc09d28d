use std::{collections::HashMap, path::PathBuf};

use crate::pictures::enums::{garment_category::GarmentCategory, gender::Gender};

/// Read-only mapping from (gender, category, style id) to a garment image
/// filename, resolved against a base directory. Built once at startup and
/// never mutated; tests inject their own entries.
#[derive(Debug, Clone)]
pub struct GarmentCatalog {
    dir: PathBuf,
    entries: HashMap<(Gender, GarmentCategory, u16), String>,
}

impl GarmentCatalog {
    pub fn new(dir: &str, entries: HashMap<(Gender, GarmentCategory, u16), String>) -> Self {
        Self {
            dir: PathBuf::from(dir),
            entries,
        }
    }

    pub fn seeded(dir: &str) -> Self {
        let mut entries = HashMap::new();

        for (index, style_id) in (101..=103).enumerate() {
            entries.insert(
                (Gender::Male, GarmentCategory::MaleTop, style_id),
                format!("male_upper_{:02}.jpg", index + 1),
            );
            entries.insert(
                (Gender::Female, GarmentCategory::FemaleTop, style_id),
                format!("female_upper_{:02}.jpg", index + 1),
            );
        }

        for (index, style_id) in (201..=203).enumerate() {
            entries.insert(
                (Gender::Male, GarmentCategory::MaleBottom, style_id),
                format!("male_lower_{:02}.jpg", index + 1),
            );
            entries.insert(
                (Gender::Female, GarmentCategory::FemaleBottom, style_id),
                format!("female_lower_{:02}.jpg", index + 1),
            );
        }

        for (index, style_id) in (401..=403).enumerate() {
            entries.insert(
                (Gender::Female, GarmentCategory::Dress, style_id),
                format!("female_dress_{:02}.jpg", index + 1),
            );
        }

        Self::new(dir, entries)
    }

    pub fn filename(
        &self,
        gender: Gender,
        category: GarmentCategory,
        style_id: u16,
    ) -> Option<&str> {
        self.entries
            .get(&(gender, category, style_id))
            .map(String::as_str)
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_covers_the_documented_style_ids() {
        let catalog = GarmentCatalog::seeded("/garments");

        assert_eq!(
            catalog.filename(Gender::Male, GarmentCategory::MaleTop, 101),
            Some("male_upper_01.jpg")
        );
        assert_eq!(
            catalog.filename(Gender::Male, GarmentCategory::MaleBottom, 201),
            Some("male_lower_01.jpg")
        );
        assert_eq!(
            catalog.filename(Gender::Female, GarmentCategory::Dress, 401),
            Some("female_dress_01.jpg")
        );
        // dresses only exist for female requests
        assert_eq!(
            catalog.filename(Gender::Male, GarmentCategory::Dress, 401),
            None
        );
    }
}

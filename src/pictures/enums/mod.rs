pub mod city;
pub mod color;
pub mod garment_category;
pub mod garment_type;
pub mod gender;
pub mod generation_phase;
pub mod material;
pub mod mode;
pub mod style;

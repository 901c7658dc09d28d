pub mod service;
pub mod templates;

pub mod apis;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod garments;
pub mod models;
pub mod prompt;
pub mod service;
pub mod util;

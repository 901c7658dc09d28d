pub mod create_picture_dto;

pub mod create_picture_response;
pub mod generated_image;
pub mod generation_event;
pub mod generation_request;

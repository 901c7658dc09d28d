pub const MODEL: &str = "doubao-seedream-4-0-250828";
pub const IMAGE_SIZE: &str = "2K";
pub const MAX_IMAGES: u8 = 4;
pub const DEFAULT_STREAM_TIMEOUT_SECS: u64 = 120;

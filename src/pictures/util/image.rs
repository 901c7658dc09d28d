use imagesize::ImageType;
use regex::Regex;

use crate::pictures::errors::PictureApiError;

const MAX_ENCODED_BYTES: usize = 10 * 1024 * 1024;
const MIN_SIDE_PX: usize = 14;
const MAX_TOTAL_PIXELS: usize = 6000 * 6000;

lazy_static! {
    static ref DATA_URL_REGEX: Regex =
        Regex::new(r"(?i)^data:image/(png|jpe?g);base64,([A-Za-z0-9+/=]+)$").unwrap();
}

pub fn is_data_url(input: &str) -> bool {
    DATA_URL_REGEX.is_match(input)
}

/// Splits a `data:image/<format>;base64,<payload>` string into its format
/// and payload parts. Only jpeg and png are accepted.
pub fn split_data_url(input: &str) -> Result<(String, String), PictureApiError> {
    let Some(captures) = DATA_URL_REGEX.captures(input)
    else {
        return Err(PictureApiError::ImageConstraint(
            "Image must be a base64 data URL (data:image/<format>;base64,...) of type jpeg or png."
                .to_string(),
        ));
    };

    Ok((
        captures[1].to_lowercase(),
        captures[2].to_string(),
    ))
}

pub fn decode_data_url(input: &str) -> Result<Vec<u8>, PictureApiError> {
    let (_, payload) = split_data_url(input)?;

    match base64::decode(payload) {
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(PictureApiError::ImageConstraint(format!(
            "Image base64 payload could not be decoded: {}",
            e
        ))),
    }
}

pub fn encode_data_url(format: &str, bytes: &[u8]) -> String {
    ["data:image/", format, ";base64,", &base64::encode(bytes)].concat()
}

/// Validates the origin image against the gateway's input constraints:
/// jpeg/png, both sides > 14px, at most 6000x6000 total pixels, aspect
/// ratio within [1/3, 3], decoded size at most 10MB.
pub fn validate_origin_image(input: &str) -> Result<(), PictureApiError> {
    let bytes = decode_data_url(input)?;

    if bytes.len() > MAX_ENCODED_BYTES {
        return Err(PictureApiError::ImageConstraint(format!(
            "Image is {} bytes; the maximum allowed is {} bytes (10MB).",
            bytes.len(),
            MAX_ENCODED_BYTES
        )));
    }

    match imagesize::image_type(&bytes) {
        Ok(ImageType::Jpeg) | Ok(ImageType::Png) => {}
        Ok(_) => {
            return Err(PictureApiError::ImageConstraint(
                "Image format not supported; only jpeg and png are accepted.".to_string(),
            ))
        }
        Err(e) => {
            return Err(PictureApiError::ImageConstraint(format!(
                "Image format could not be determined: {}",
                e
            )))
        }
    }

    let size = match imagesize::blob_size(&bytes) {
        Ok(size) => size,
        Err(e) => {
            return Err(PictureApiError::ImageConstraint(format!(
                "Image dimensions could not be determined: {}",
                e
            )))
        }
    };

    if size.width <= MIN_SIDE_PX || size.height <= MIN_SIDE_PX {
        return Err(PictureApiError::ImageConstraint(format!(
            "Image sides must be greater than {}px; got {}x{}px.",
            MIN_SIDE_PX, size.width, size.height
        )));
    }

    if size.width * size.height > MAX_TOTAL_PIXELS {
        return Err(PictureApiError::ImageConstraint(format!(
            "Image exceeds the maximum of 6000x6000 total pixels; got {}x{}px.",
            size.width, size.height
        )));
    }

    // aspect ratio (w/h) must stay within [1/3, 3] inclusive; integer math
    // keeps the exact boundaries valid
    if 3 * size.width < size.height || size.width > 3 * size.height {
        return Err(PictureApiError::ImageConstraint(format!(
            "Image aspect ratio must be within [1/3, 3]; got {}x{}px.",
            size.width, size.height
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }

    fn png_data_url(width: u32, height: u32) -> String {
        encode_data_url("png", &png_bytes(width, height))
    }

    #[test]
    fn accepts_a_plain_square_png() {
        assert!(validate_origin_image(&png_data_url(1000, 1000)).is_ok());
    }

    #[test]
    fn rejects_input_without_a_data_url_prefix() {
        let err = validate_origin_image("iVBORw0KGgo=").unwrap_err();
        assert_eq!(err.kind(), "ImageConstraintViolation");
    }

    #[test]
    fn rejects_unsupported_image_formats() {
        let err = validate_origin_image("data:image/webp;base64,AAAA");
        assert!(err.is_err());

        // declared png but the payload is a gif
        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&[100, 0, 100, 0, 0, 0, 0]);
        let err = validate_origin_image(&encode_data_url("png", &gif)).unwrap_err();
        assert!(err.message().contains("jpeg and png"));
    }

    #[test]
    fn rejects_sides_of_14px_and_accepts_15px() {
        assert!(validate_origin_image(&png_data_url(14, 100)).is_err());
        assert!(validate_origin_image(&png_data_url(100, 14)).is_err());
        assert!(validate_origin_image(&png_data_url(15, 15)).is_ok());
    }

    #[test]
    fn total_pixel_boundary_is_inclusive() {
        assert!(validate_origin_image(&png_data_url(6000, 6000)).is_ok());
        assert!(validate_origin_image(&png_data_url(6001, 6000)).is_err());
    }

    #[test]
    fn aspect_ratio_boundaries_are_inclusive() {
        // exactly 3 and exactly 1/3
        assert!(validate_origin_image(&png_data_url(3000, 1000)).is_ok());
        assert!(validate_origin_image(&png_data_url(1000, 3000)).is_ok());
        // just past the boundary
        assert!(validate_origin_image(&png_data_url(3001, 1000)).is_err());
        assert!(validate_origin_image(&png_data_url(1000, 3001)).is_err());
    }

    #[test]
    fn rejects_payloads_over_ten_megabytes() {
        let mut bytes = png_bytes(1000, 1000);
        bytes.resize(MAX_ENCODED_BYTES + 1, 0);
        let err = validate_origin_image(&encode_data_url("png", &bytes)).unwrap_err();
        assert!(err.message().contains("10MB"));
    }

    #[test]
    fn splits_format_and_payload() {
        let (format, payload) = split_data_url("data:image/JPEG;base64,AAAA").unwrap();
        assert_eq!(format, "jpeg");
        assert_eq!(payload, "AAAA");
    }
}

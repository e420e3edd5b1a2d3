use crate::error::PredictionError;
use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

const JPEG_QUALITY: u8 = 95;

/// Encodes the resized image as a base64 JPEG data URI.
pub fn encode_preview(preview: &RgbImage) -> Result<String, PredictionError> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(preview)?;

    Ok(format!(
        "{}{}",
        DATA_URI_PREFIX,
        general_purpose::STANDARD.encode(&buffer)
    ))
}

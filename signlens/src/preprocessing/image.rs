use crate::error::PreprocessError;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use ndarray::{Array3, Array4, Axis};

/// Spatial resolution the classifier was trained on.
pub const INPUT_SIZE: u32 = 64;
pub const CHANNELS: usize = 3;

/// Output of [`prepare`]: the model input plus the resized image it was built from.
#[derive(Debug, Clone)]
pub struct Prepared {
    /// Shape `[1, 64, 64, 3]` (NHWC), values in `[0, 1]`.
    pub tensor: Array4<f32>,
    /// The 64x64 RGB image before normalization.
    pub preview: RgbImage,
}

/// Decodes raw bytes into an image. The format is guessed from the content.
pub fn decode(buffer: &[u8]) -> Result<DynamicImage, PreprocessError> {
    if buffer.is_empty() {
        return Err(PreprocessError::Empty);
    }
    image::load_from_memory(buffer).map_err(PreprocessError::Decode)
}

/// Resizes and normalizes a decoded image into the classifier's input layout.
pub fn prepare(img: &DynamicImage) -> Result<Prepared, PreprocessError> {
    // Colour mode: alpha dropped, grey expanded, channels in RGB order.
    let rgb = img.to_rgb8();

    // Aspect ratio is not preserved.
    let preview = image::imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let size = INPUT_SIZE as usize;
    let got = [preview.height() as usize, preview.width() as usize, CHANNELS];
    if got != [size, size, CHANNELS] {
        return Err(PreprocessError::Shape {
            expected: [size, size, CHANNELS],
            got,
        });
    }

    // Row-major [H, W, C], exactly how the pixel buffer is laid out
    let array = Array3::from_shape_vec((size, size, CHANNELS), preview.as_raw().clone())
        .map_err(|_| PreprocessError::Shape {
            expected: [size, size, CHANNELS],
            got,
        })?;

    let tensor = array
        .mapv(|v| f32::from(v) / 255.0)
        .insert_axis(Axis(0));

    Ok(Prepared { tensor, preview })
}

/// Preprocesses raw image bytes into a tensor of shape `[1, 64, 64, 3]`.
pub fn preprocess_bytes(buffer: &[u8]) -> Result<Array4<f32>, PreprocessError> {
    let img = decode(buffer)?;
    Ok(prepare(&img)?.tensor)
}

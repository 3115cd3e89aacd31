//! Image decoder trait
//!
//! Defines the interface for turning encoded image bytes into a
//! `PixelBuffer`. Extraction never sees encoded data.

use crate::domain::entities::PixelBuffer;
use thiserror::Error;

/// Errors that can occur while decoding an image
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed image data: {0}")]
    Malformed(String),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Decode error: {0}")]
    Other(String),
}

/// Trait for decoding encoded image bytes
///
/// # Example
///
/// ```
/// use dominant_color::domain::repositories::ImageDecoder;
/// use dominant_color::infrastructure::decoders::ImageCrateDecoder;
/// use image::{ImageFormat, Rgba, RgbaImage};
/// use std::io::Cursor;
///
/// let mut png_bytes = Vec::new();
/// RgbaImage::from_pixel(512, 128, Rgba([10, 20, 30, 255]))
///     .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
///     .unwrap();
///
/// let decoder = ImageCrateDecoder::new().with_max_dimension(256);
/// let buffer = decoder.decode(&png_bytes).unwrap();
/// assert_eq!((buffer.width(), buffer.height()), (256, 64));
/// ```
pub trait ImageDecoder: Send + Sync {
    /// Decodes the bytes into an RGBA pixel buffer
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError>;

    /// Human-readable name, used in log output
    fn name(&self) -> &'static str;
}

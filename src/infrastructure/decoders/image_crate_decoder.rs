//! `image` crate decoder
//!
//! Decodes in-memory JPEG, PNG, GIF, BMP, TIFF and WebP data into an RGBA
//! `PixelBuffer`, optionally shrinking large images first.

use crate::domain::entities::{Pixel, PixelBuffer};
use crate::domain::repositories::{DecodeError, ImageDecoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat};

/// Formats this decoder is built to read
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
];

/// Decoder backed by the `image` crate
#[derive(Debug, Clone, Default)]
pub struct ImageCrateDecoder {
    max_dimension: Option<u32>,
}

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shrinks images whose longest edge exceeds `max_dimension`
    ///
    /// Uses nearest-neighbour sampling so no new colors are introduced,
    /// and keeps the aspect ratio.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = Some(max_dimension.max(1));
        self
    }

    fn shrink(&self, image: DynamicImage) -> DynamicImage {
        match self.max_dimension {
            Some(max) if image.width() > max || image.height() > max => {
                let shrunk = image.resize(max, max, FilterType::Nearest);
                log::debug!(
                    "Downsampled {}x{} to {}x{}",
                    image.width(),
                    image.height(),
                    shrunk.width(),
                    shrunk.height()
                );
                shrunk
            }
            _ => image,
        }
    }
}

fn map_image_error(error: ImageError) -> DecodeError {
    match error {
        ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
        ImageError::Decoding(e) => DecodeError::Malformed(e.to_string()),
        other => DecodeError::Other(other.to_string()),
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::EmptyImage);
        }

        let format = image::guess_format(bytes).map_err(map_image_error)?;
        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(DecodeError::UnsupportedFormat(format!("{:?}", format)));
        }

        let image = image::load_from_memory_with_format(bytes, format).map_err(map_image_error)?;
        if image.width() == 0 || image.height() == 0 {
            return Err(DecodeError::EmptyImage);
        }

        let rgba = self.shrink(image).to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| Pixel::rgba(p[0], p[1], p[2], p[3]))
            .collect();

        PixelBuffer::new(width, height, pixels).map_err(|e| DecodeError::Other(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "image"
    }
}

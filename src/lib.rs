//! Dominant color extraction
//!
//! Reduces a decoded image to the single color most representative of its
//! pixels. Two strategies are available:
//!
//! - a quantized color histogram (default), where the most populated bucket
//!   wins and ties go to the smallest bucket key
//! - k-means clustering in RGB space, preferring the heaviest cluster that
//!   is neither too dark nor too bright
//!
//! ```
//! use dominant_color::{extract_dominant_color, ExtractionOptions, Pixel, PixelBuffer, Rgb};
//!
//! let buffer = PixelBuffer::new(
//!     2,
//!     2,
//!     vec![
//!         Pixel::rgb(255, 0, 0),
//!         Pixel::rgb(255, 0, 0),
//!         Pixel::rgb(255, 0, 0),
//!         Pixel::rgb(0, 0, 255),
//!     ],
//! )
//! .unwrap();
//!
//! let color = extract_dominant_color(&buffer, &ExtractionOptions::default()).unwrap();
//! assert_eq!(color, Rgb::new(252, 4, 4));
//! assert_eq!(color.to_hex(), "fc0404");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::dto::{ConfigError, ExtractionOptions, ExtractionReport, Strategy};
pub use application::{extract_dominant_color, ExtractDominantColorUseCase};
pub use domain::entities::{Pixel, PixelBuffer, Rgb};
pub use domain::repositories::{DecodeError, ImageDecoder};
pub use domain::services::{ColorExtractor, HistogramExtractor, KMeansExtractor, KMeansParams};
pub use error::{ExtractionError, Result};
pub use infrastructure::decoders::{Base64Decoder, ImageCrateDecoder};

fn image_decoder(options: &ExtractionOptions) -> ImageCrateDecoder {
    match options.sample_size {
        Some(max_edge) => ImageCrateDecoder::new().with_max_dimension(max_edge),
        None => ImageCrateDecoder::new(),
    }
}

/// Decodes encoded image bytes and extracts their dominant color
///
/// Uses [`ImageCrateDecoder`], shrinking to `options.sample_size` first
/// when it is set.
pub fn extract_from_bytes(bytes: &[u8], options: &ExtractionOptions) -> Result<ExtractionReport> {
    ExtractDominantColorUseCase::new(image_decoder(options), options.clone())?.execute(bytes)
}

/// Extracts the dominant color of a base64-encoded image
///
/// The payload uses the standard alphabet with padding. Text that is not
/// valid base64 fails with [`DecodeError::Malformed`].
pub fn extract_from_base64(payload: &str, options: &ExtractionOptions) -> Result<ExtractionReport> {
    let decoder = Base64Decoder::new(image_decoder(options));
    ExtractDominantColorUseCase::new(decoder, options.clone())?.execute(payload.as_bytes())
}

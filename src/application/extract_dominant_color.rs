//! Extract dominant color use case
//!
//! Orchestrates decode → extract for one image or a batch of images.
//! Each extraction is single-threaded; batches run images in parallel.

use crate::application::dto::{ExtractionOptions, ExtractionReport};
use crate::domain::entities::{PixelBuffer, Rgb};
use crate::domain::repositories::ImageDecoder;
use crate::domain::services::ColorExtractor;
use crate::error::Result;
use rayon::prelude::*;
use std::time::Instant;

/// Extracts the dominant color of a decoded buffer
///
/// Validates `options`, runs the selected strategy once, and returns the
/// color. `options.sample_size` is not applied here: downsampling is the
/// decoder's job.
pub fn extract_dominant_color(buffer: &PixelBuffer, options: &ExtractionOptions) -> Result<Rgb> {
    options.build_extractor()?.extract(buffer)
}

/// Extract dominant color use case
///
/// Decodes images with the given decoder and reduces them to a single
/// color with the strategy chosen in the options.
pub struct ExtractDominantColorUseCase<D: ImageDecoder> {
    decoder: D,
    extractor: Box<dyn ColorExtractor>,
    options: ExtractionOptions,
}

impl<D: ImageDecoder> ExtractDominantColorUseCase<D> {
    /// Creates the use case, failing on invalid options
    pub fn new(decoder: D, options: ExtractionOptions) -> Result<Self> {
        let extractor = options.build_extractor()?;
        Ok(Self {
            decoder,
            extractor,
            options,
        })
    }

    /// Decodes `bytes` and extracts their dominant color
    pub fn execute(&self, bytes: &[u8]) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        log::info!(
            "Extracting dominant color from {} bytes ({} decoder, {} strategy)",
            bytes.len(),
            self.decoder.name(),
            self.extractor.name()
        );

        let buffer = self.decoder.decode(bytes)?;
        log::debug!("Decoded {}x{} buffer", buffer.width(), buffer.height());

        self.extract(&buffer, start_time)
    }

    /// Extracts the dominant color of an already decoded buffer
    pub fn execute_buffer(&self, buffer: &PixelBuffer) -> Result<ExtractionReport> {
        self.extract(buffer, Instant::now())
    }

    /// Processes independent images in parallel
    ///
    /// Results keep the order of `images`; one failure does not affect
    /// the others.
    pub fn execute_batch(&self, images: &[&[u8]]) -> Vec<Result<ExtractionReport>> {
        log::info!("Starting batch extraction of {} images", images.len());

        let results: Vec<Result<ExtractionReport>> = images
            .par_iter()
            .enumerate()
            .map(|(index, bytes)| {
                self.execute(bytes).inspect_err(|e| {
                    log::warn!("Image {} failed: {}", index, e);
                })
            })
            .collect();

        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        log::info!(
            "Batch complete: {} of {} images succeeded",
            succeeded,
            images.len()
        );

        results
    }

    fn extract(&self, buffer: &PixelBuffer, start_time: Instant) -> Result<ExtractionReport> {
        let extraction = self.extractor.extract_detailed(buffer)?;
        let report = ExtractionReport::new(
            extraction,
            self.options.strategy,
            buffer.width(),
            buffer.height(),
            start_time.elapsed(),
        );

        log::info!("Extraction complete: {}", report.summary());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Pixel;
    use crate::domain::repositories::DecodeError;
    use crate::error::ExtractionError;

    /// Treats the input as packed RGBA of a single row
    struct RawRgbaDecoder;

    impl ImageDecoder for RawRgbaDecoder {
        fn decode(&self, bytes: &[u8]) -> std::result::Result<PixelBuffer, DecodeError> {
            if bytes.len() % 4 != 0 {
                return Err(DecodeError::Malformed(format!("{} bytes", bytes.len())));
            }
            PixelBuffer::from_rgba8((bytes.len() / 4) as u32, 1, bytes)
                .map_err(|e| DecodeError::Other(e.to_string()))
        }

        fn name(&self) -> &'static str {
            "raw-rgba"
        }
    }

    #[test]
    fn test_execute() {
        let use_case =
            ExtractDominantColorUseCase::new(RawRgbaDecoder, ExtractionOptions::default()).unwrap();
        let bytes = [0, 255, 0, 255, 0, 255, 0, 255, 9, 9, 9, 255];
        let report = use_case.execute(&bytes).unwrap();
        assert_eq!(report.color, Rgb::new(4, 252, 4));
        assert_eq!(report.width, 3);
        assert_eq!(report.dominant_pixels, 2);
    }

    #[test]
    fn test_decode_error_propagates() {
        let use_case =
            ExtractDominantColorUseCase::new(RawRgbaDecoder, ExtractionOptions::default()).unwrap();
        assert!(matches!(
            use_case.execute(&[1, 2, 3]),
            Err(ExtractionError::Decode(DecodeError::Malformed(_)))
        ));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = ExtractionOptions::default().with_quantization_bits(0);
        assert!(matches!(
            ExtractDominantColorUseCase::new(RawRgbaDecoder, options),
            Err(ExtractionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_batch_keeps_order() {
        let use_case =
            ExtractDominantColorUseCase::new(RawRgbaDecoder, ExtractionOptions::default()).unwrap();
        let red = [255, 0, 0, 255];
        let bad = [1, 2];
        let blue = [0, 0, 255, 255];
        let results = use_case.execute_batch(&[&red, &bad, &blue]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().color, Rgb::new(252, 4, 4));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().color, Rgb::new(4, 4, 252));
    }

    #[test]
    fn test_free_function() {
        let buffer = PixelBuffer::filled(3, 3, Pixel::rgb(128, 128, 128));
        let color = extract_dominant_color(&buffer, &ExtractionOptions::default()).unwrap();
        assert_eq!(color, Rgb::new(132, 132, 132));
    }
}

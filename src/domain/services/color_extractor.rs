//! Color extractor trait and the histogram strategy
//!
//! The histogram strategy buckets every eligible pixel by its quantized
//! color in a single pass and reports the midpoint of the fullest bucket.

use crate::domain::entities::{
    ColorHistogram, PixelBuffer, Rgb, MAX_QUANTIZATION_BITS, MIN_QUANTIZATION_BITS,
};
use crate::error::{ExtractionError, Result};

pub const DEFAULT_QUANTIZATION_BITS: u8 = 5;

/// Outcome of one extraction with the statistics behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    /// The dominant color
    pub color: Rgb,
    /// Pixels that passed the alpha cutoff
    pub eligible_pixels: u64,
    /// Pixels in the winning bucket or cluster
    pub dominant_pixels: u64,
    /// Number of buckets or clusters formed
    pub groups: usize,
}

impl Extraction {
    /// Share of eligible pixels that back the dominant color (0.0 - 1.0)
    pub fn coverage(&self) -> f64 {
        if self.eligible_pixels == 0 {
            return 0.0;
        }
        self.dominant_pixels as f64 / self.eligible_pixels as f64
    }
}

/// Trait for reducing a pixel buffer to a single dominant color
///
/// Implementations are pure: no state is shared between calls, so one
/// extractor can serve any number of threads.
///
/// # Example
///
/// ```
/// use dominant_color::domain::entities::{Pixel, PixelBuffer};
/// use dominant_color::domain::services::{ColorExtractor, HistogramExtractor};
///
/// let buffer = PixelBuffer::filled(4, 4, Pixel::rgb(200, 30, 30));
/// let extractor = HistogramExtractor::new(5).unwrap();
/// let color = extractor.extract(&buffer).unwrap();
/// assert_eq!(color.red, 204);
/// ```
pub trait ColorExtractor: Send + Sync {
    /// Short strategy name, used in log output
    fn name(&self) -> &'static str;

    /// Extracts the dominant color together with its statistics
    fn extract_detailed(&self, buffer: &PixelBuffer) -> Result<Extraction>;

    /// Extracts the dominant color
    fn extract(&self, buffer: &PixelBuffer) -> Result<Rgb> {
        self.extract_detailed(buffer).map(|e| e.color)
    }
}

/// Checks a quantization depth against the supported 1..=8 range
pub fn validate_quantization_bits(bits: u8) -> Result<()> {
    if !(MIN_QUANTIZATION_BITS..=MAX_QUANTIZATION_BITS).contains(&bits) {
        return Err(ExtractionError::invalid_config(
            "quantization_bits",
            bits,
            "must be between 1 and 8",
        ));
    }
    Ok(())
}

/// Histogram-bucket dominant color extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramExtractor {
    quantization_bits: u8,
    ignore_alpha_below: u8,
}

impl HistogramExtractor {
    /// Creates an extractor keeping `quantization_bits` bits per channel
    pub fn new(quantization_bits: u8) -> Result<Self> {
        validate_quantization_bits(quantization_bits)?;
        Ok(Self {
            quantization_bits,
            ignore_alpha_below: 0,
        })
    }

    /// Excludes pixels whose alpha is strictly below `threshold`
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.ignore_alpha_below = threshold;
        self
    }

    /// Builds the histogram of eligible pixels
    pub fn histogram(&self, buffer: &PixelBuffer) -> ColorHistogram {
        let mut histogram = ColorHistogram::new(self.quantization_bits);
        for pixel in buffer.eligible(self.ignore_alpha_below) {
            histogram.add(pixel);
        }
        histogram
    }
}

impl Default for HistogramExtractor {
    fn default() -> Self {
        Self {
            quantization_bits: DEFAULT_QUANTIZATION_BITS,
            ignore_alpha_below: 0,
        }
    }
}

impl ColorExtractor for HistogramExtractor {
    fn name(&self) -> &'static str {
        "histogram"
    }

    fn extract_detailed(&self, buffer: &PixelBuffer) -> Result<Extraction> {
        let histogram = self.histogram(buffer);
        let winner = histogram.dominant().ok_or(ExtractionError::EmptyInput)?;

        log::debug!(
            "Histogram: {} pixels in {} buckets ({} bits), winner key {:#x} with {}",
            histogram.total(),
            histogram.len(),
            histogram.bits(),
            winner.key,
            winner.count
        );

        Ok(Extraction {
            color: histogram.representative(winner.key),
            eligible_pixels: histogram.total(),
            dominant_pixels: winner.count,
            groups: histogram.len(),
        })
    }
}

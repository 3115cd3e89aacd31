//! Domain services
//!
//! Dominant color extraction strategies.

mod color_extractor;
mod kmeans;

pub use color_extractor::{
    validate_quantization_bits, ColorExtractor, Extraction, HistogramExtractor,
    DEFAULT_QUANTIZATION_BITS,
};
pub use kmeans::{KMeansExtractor, KMeansParams};

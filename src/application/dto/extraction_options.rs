//! Extraction options DTO
//!
//! All tunables of an extraction in one serialisable struct. Options can be
//! built in code with the `with_*` methods or loaded from JSON:
//!
//! ```json
//! {
//!   "strategy": "kmeans",
//!   "quantization_bits": 5,
//!   "ignore_alpha_below": 1,
//!   "sample_size": 256,
//!   "kmeans": { "cluster_count": 4, "max_iterations": 50 }
//! }
//! ```
//!
//! Missing fields take their defaults.

use crate::domain::services::{
    validate_quantization_bits, ColorExtractor, HistogramExtractor, KMeansExtractor,
    KMeansParams, DEFAULT_QUANTIZATION_BITS,
};
use crate::error::{ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Most populated quantized color bucket
    #[default]
    Histogram,
    /// Heaviest k-means cluster within the brightness limits
    KMeans,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Histogram => write!(f, "histogram"),
            Strategy::KMeans => write!(f, "kmeans"),
        }
    }
}

/// Errors from loading options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ExtractionError),
}

/// Options for a dominant color extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Algorithm used to pick the color
    pub strategy: Strategy,
    /// Most-significant bits kept per channel by the histogram strategy (1-8)
    pub quantization_bits: u8,
    /// Pixels with alpha strictly below this are ignored (0 = keep all)
    pub ignore_alpha_below: u8,
    /// Longest edge images are shrunk to before extraction (None = full size)
    pub sample_size: Option<u32>,
    /// k-means tunables
    pub kmeans: KMeansParams,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Histogram,
            quantization_bits: DEFAULT_QUANTIZATION_BITS,
            ignore_alpha_below: 0,
            sample_size: None,
            kmeans: KMeansParams::default(),
        }
    }
}

impl ExtractionOptions {
    /// Options mirroring the k-means setup images were historically analysed
    /// with: transparent pixels skipped, images shrunk to 256 pixels
    pub fn kmeans_legacy() -> Self {
        Self {
            strategy: Strategy::KMeans,
            ignore_alpha_below: 1,
            sample_size: Some(256),
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_quantization_bits(mut self, bits: u8) -> Self {
        self.quantization_bits = bits;
        self
    }

    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.ignore_alpha_below = threshold;
        self
    }

    pub fn with_sample_size(mut self, max_edge: u32) -> Self {
        self.sample_size = Some(max_edge);
        self
    }

    pub fn with_kmeans(mut self, params: KMeansParams) -> Self {
        self.kmeans = params;
        self
    }

    /// Checks the shared options, then those of the selected strategy
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == Some(0) {
            return Err(ExtractionError::invalid_config(
                "sample_size",
                0,
                "must be at least 1 when set",
            ));
        }
        validate_quantization_bits(self.quantization_bits)?;
        match self.strategy {
            Strategy::Histogram => Ok(()),
            Strategy::KMeans => self.kmeans.validate(),
        }
    }

    /// Builds the extractor for the selected strategy
    pub fn build_extractor(&self) -> Result<Box<dyn ColorExtractor>> {
        self.validate()?;
        let extractor: Box<dyn ColorExtractor> = match self.strategy {
            Strategy::Histogram => Box::new(
                HistogramExtractor::new(self.quantization_bits)?
                    .with_alpha_threshold(self.ignore_alpha_below),
            ),
            Strategy::KMeans => Box::new(
                KMeansExtractor::new(self.kmeans.clone())?
                    .with_alpha_threshold(self.ignore_alpha_below),
            ),
        };
        Ok(extractor)
    }

    /// Parses and validates options from a JSON string
    pub fn from_json_str(json: &str) -> std::result::Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads and validates options from a JSON file
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialises the options as pretty-printed JSON
    pub fn to_json_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Extraction report DTO

use super::extraction_options::Strategy;
use crate::domain::entities::Rgb;
use crate::domain::services::Extraction;
use serde::Serialize;
use std::time::Duration;

/// Result of extracting the dominant color of one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// The dominant color
    pub color: Rgb,
    /// Strategy that produced the color
    pub strategy: Strategy,
    /// Width of the analysed buffer (after any downsampling)
    pub width: u32,
    /// Height of the analysed buffer (after any downsampling)
    pub height: u32,
    /// Pixels that passed the alpha cutoff
    pub eligible_pixels: u64,
    /// Pixels backing the dominant color
    pub dominant_pixels: u64,
    /// Buckets or clusters formed
    pub groups: usize,
    /// Wall time of decode plus extraction
    pub duration: Duration,
}

impl ExtractionReport {
    pub fn new(
        extraction: Extraction,
        strategy: Strategy,
        width: u32,
        height: u32,
        duration: Duration,
    ) -> Self {
        Self {
            color: extraction.color,
            strategy,
            width,
            height,
            eligible_pixels: extraction.eligible_pixels,
            dominant_pixels: extraction.dominant_pixels,
            groups: extraction.groups,
            duration,
        }
    }

    /// Lowercase `rrggbb`
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// The extraction statistics this report was built from
    fn extraction(&self) -> Extraction {
        Extraction {
            color: self.color,
            eligible_pixels: self.eligible_pixels,
            dominant_pixels: self.dominant_pixels,
            groups: self.groups,
        }
    }

    /// Share of eligible pixels backing the color (0.0 - 1.0)
    pub fn coverage(&self) -> f64 {
        self.extraction().coverage()
    }

    /// Returns a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} via {} on {}x{}: {:.1}% of {} pixels in {:.2}ms",
            self.color,
            self.strategy,
            self.width,
            self.height,
            self.coverage() * 100.0,
            self.eligible_pixels,
            self.duration.as_secs_f64() * 1000.0
        )
    }
}

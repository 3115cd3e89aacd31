//! k-means dominant color extractor
//!
//! Clusters pixel colors in RGB space (N clusters, M iterations):
//!
//! 1. Seed N centroids by sampling pixels at pseudo-random positions,
//!    skipping colors already used as a centroid. A cluster that cannot
//!    find a unique color within the retry budget is dropped, so an image
//!    with a single color degenerates to N = 1.
//! 2. Assign every eligible pixel to its nearest centroid.
//! 3. Move each centroid to the mean of its pixels; stop once no centroid
//!    moves or M passes have run.
//! 4. Walk the clusters from heaviest to lightest and return the first
//!    whose channel sum is strictly between the darkness and brightness
//!    limits, falling back to the heaviest.
//!
//! Sampling uses a fixed-seed generator so the result is reproducible.

use super::color_extractor::{ColorExtractor, Extraction};
use crate::domain::entities::{Cluster, Pixel, PixelBuffer, Rgb};
use crate::error::{ExtractionError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the k-means strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansParams {
    /// Number of clusters to seed
    pub cluster_count: usize,
    /// Sampling attempts per cluster when looking for an unused color
    pub unique_color_retries: usize,
    /// Upper bound on assignment/update passes
    pub max_iterations: usize,
    /// Clusters whose R+G+B sum is at or above this are considered too bright
    pub max_brightness: u16,
    /// Clusters whose R+G+B sum is at or below this are considered too dark
    pub max_darkness: u16,
    /// Seed of the sampling generator
    pub seed: u64,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            cluster_count: 4,
            unique_color_retries: 10,
            max_iterations: 50,
            max_brightness: 665,
            max_darkness: 100,
            seed: 0,
        }
    }
}

impl KMeansParams {
    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 {
            return Err(ExtractionError::invalid_config(
                "cluster_count",
                self.cluster_count,
                "at least one cluster is required",
            ));
        }
        if self.unique_color_retries == 0 {
            return Err(ExtractionError::invalid_config(
                "unique_color_retries",
                self.unique_color_retries,
                "at least one sampling attempt is required",
            ));
        }
        if self.max_iterations == 0 {
            return Err(ExtractionError::invalid_config(
                "max_iterations",
                self.max_iterations,
                "at least one pass is required",
            ));
        }
        if self.max_darkness >= self.max_brightness {
            return Err(ExtractionError::invalid_config(
                "max_darkness",
                self.max_darkness,
                "must be below max_brightness",
            ));
        }
        Ok(())
    }
}

/// 64-bit LCG (Knuth's MMIX constants)
struct SampleRng(u64);

impl SampleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

/// k-means dominant color extractor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KMeansExtractor {
    params: KMeansParams,
    ignore_alpha_below: u8,
}

impl KMeansExtractor {
    pub fn new(params: KMeansParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            ignore_alpha_below: 0,
        })
    }

    /// Excludes pixels whose alpha is strictly below `threshold`
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.ignore_alpha_below = threshold;
        self
    }

    fn seed_clusters(&self, buffer: &PixelBuffer) -> Vec<Cluster> {
        let pixels = buffer.pixels();
        let mut rng = SampleRng::new(self.params.seed);
        let mut clusters: Vec<Cluster> = Vec::with_capacity(self.params.cluster_count);

        for _ in 0..self.params.cluster_count {
            let mut seeded = false;
            for _ in 0..self.params.unique_color_retries {
                let pixel = &pixels[rng.below(pixels.len())];
                if !pixel.is_eligible(self.ignore_alpha_below) {
                    continue;
                }
                let color = pixel_color(pixel);
                if clusters.iter().all(|c| c.centroid() != color) {
                    clusters.push(Cluster::new(color));
                    seeded = true;
                    break;
                }
            }
            if !seeded {
                break;
            }
        }

        // Sparse opaque regions can dodge every sample.
        if clusters.is_empty() {
            if let Some(first) = buffer.eligible(self.ignore_alpha_below).next() {
                clusters.push(Cluster::new(pixel_color(first)));
            }
        }
        clusters
    }

    /// Runs the assignment/update loop; returns the number of passes made
    fn converge(&self, buffer: &PixelBuffer, clusters: &mut [Cluster]) -> usize {
        let mut passes = 0;
        while passes < self.params.max_iterations {
            passes += 1;
            for pixel in buffer.eligible(self.ignore_alpha_below) {
                let mut closest = 0;
                let mut best = u32::MAX;
                for (index, cluster) in clusters.iter().enumerate() {
                    let distance = cluster.distance_squared(pixel);
                    if distance < best {
                        best = distance;
                        closest = index;
                    }
                }
                clusters[closest].add_point(pixel);
            }

            let mut converged = true;
            for cluster in clusters.iter_mut() {
                converged &= cluster.recompute_centroid();
            }
            if converged {
                break;
            }
        }
        passes
    }
}

fn pixel_color(pixel: &Pixel) -> Rgb {
    Rgb::new(pixel.red, pixel.green, pixel.blue)
}

impl ColorExtractor for KMeansExtractor {
    fn name(&self) -> &'static str {
        "kmeans"
    }

    fn extract_detailed(&self, buffer: &PixelBuffer) -> Result<Extraction> {
        if buffer.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let mut clusters = self.seed_clusters(buffer);
        if clusters.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let passes = self.converge(buffer, &mut clusters);
        clusters.sort_by(|a, b| b.weight().cmp(&a.weight()));

        let eligible_pixels: u64 = clusters.iter().map(Cluster::weight).sum();
        let chosen = clusters
            .iter()
            .find(|c| {
                let sum = c.centroid().channel_sum();
                sum < self.params.max_brightness && sum > self.params.max_darkness
            })
            .unwrap_or(&clusters[0]);

        log::debug!(
            "k-means: {} clusters after {} passes, chose {} ({} of {} pixels)",
            clusters.len(),
            passes,
            chosen.centroid(),
            chosen.weight(),
            eligible_pixels
        );

        Ok(Extraction {
            color: chosen.centroid(),
            eligible_pixels,
            dominant_pixels: chosen.weight(),
            groups: clusters.len(),
        })
    }
}

//! k-means cluster entity

use super::color::Rgb;
use super::pixel::Pixel;

/// A cluster of pixel colors in RGB space
///
/// Keeps a running sum of the points assigned in the current pass so the
/// centroid can be recomputed without a second walk over the pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    centroid: Rgb,
    sum: [u64; 3],
    aggregate_count: u64,
    weight: u64,
}

impl Cluster {
    pub fn new(centroid: Rgb) -> Self {
        Self {
            centroid,
            sum: [0; 3],
            aggregate_count: 0,
            weight: 0,
        }
    }

    pub fn centroid(&self) -> Rgb {
        self.centroid
    }

    /// Number of pixels assigned in the last completed pass
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Squared Euclidean distance from the centroid
    #[inline]
    pub fn distance_squared(&self, pixel: &Pixel) -> u32 {
        let dr = self.centroid.red as i32 - pixel.red as i32;
        let dg = self.centroid.green as i32 - pixel.green as i32;
        let db = self.centroid.blue as i32 - pixel.blue as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    pub fn add_point(&mut self, pixel: &Pixel) {
        self.sum[0] += pixel.red as u64;
        self.sum[1] += pixel.green as u64;
        self.sum[2] += pixel.blue as u64;
        self.aggregate_count += 1;
    }

    /// Mean of the points added since the last recompute, or the current
    /// centroid when nothing was added
    fn aggregate_centroid(&self) -> Rgb {
        if self.aggregate_count == 0 {
            return self.centroid;
        }
        let n = self.aggregate_count;
        Rgb::new(
            (self.sum[0] / n) as u8,
            (self.sum[1] / n) as u8,
            (self.sum[2] / n) as u8,
        )
    }

    /// Moves the centroid to the mean of this pass and resets the
    /// accumulators. Returns true when the centroid did not move.
    pub fn recompute_centroid(&mut self) -> bool {
        let next = self.aggregate_centroid();
        let converged = next == self.centroid;
        self.centroid = next;
        self.weight = self.aggregate_count;
        self.sum = [0; 3];
        self.aggregate_count = 0;
        converged
    }
}

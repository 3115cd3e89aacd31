//! Domain entities
//!
//! Pixels going in, colors coming out, and the per-call aggregates
//! (histogram buckets, k-means clusters) in between.

mod cluster;
mod color;
mod histogram;
mod pixel;

pub use cluster::Cluster;
pub use color::{ParseColorError, Rgb};
pub use histogram::{ColorBucket, ColorHistogram, MAX_QUANTIZATION_BITS, MIN_QUANTIZATION_BITS};
pub use pixel::{Pixel, PixelBuffer};

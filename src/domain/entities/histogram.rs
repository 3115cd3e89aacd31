//! Quantized color histogram
//!
//! Each channel keeps only its `bits` most-significant bits, so visually
//! near-identical colors collapse into one bucket. Keys pack the three
//! quantized channels as `r << 2b | g << b | b`, which makes "numerically
//! smallest key" a well-defined tie-break.

use super::color::Rgb;
use super::pixel::Pixel;
use std::collections::HashMap;

pub const MIN_QUANTIZATION_BITS: u8 = 1;
pub const MAX_QUANTIZATION_BITS: u8 = 8;

/// A quantized color key and the number of pixels that fell into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    pub key: u32,
    pub count: u64,
}

/// Per-call histogram of quantized colors
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    bits: u8,
    buckets: HashMap<u32, u64>,
    total: u64,
}

impl ColorHistogram {
    /// Creates an empty histogram; `bits` must already be validated to 1..=8
    pub fn new(bits: u8) -> Self {
        debug_assert!((MIN_QUANTIZATION_BITS..=MAX_QUANTIZATION_BITS).contains(&bits));
        Self {
            bits,
            buckets: HashMap::new(),
            total: 0,
        }
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Quantized bucket key for a pixel
    #[inline]
    pub fn key_for(&self, pixel: &Pixel) -> u32 {
        let shift = 8 - self.bits;
        let r = (pixel.red >> shift) as u32;
        let g = (pixel.green >> shift) as u32;
        let b = (pixel.blue >> shift) as u32;
        (r << (2 * self.bits)) | (g << self.bits) | b
    }

    pub fn add(&mut self, pixel: &Pixel) {
        let key = self.key_for(pixel);
        *self.buckets.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of pixels counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Most populated bucket; ties go to the smallest key
    pub fn dominant(&self) -> Option<ColorBucket> {
        self.buckets
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then_with(|| kb.cmp(ka)))
            .map(|(&key, &count)| ColorBucket { key, count })
    }

    /// Expands a key to the midpoint of its quantization range on each channel
    pub fn representative(&self, key: u32) -> Rgb {
        let mask = (1u32 << self.bits) - 1;
        let shift = 8 - self.bits;
        let half_step = (1u32 << shift) >> 1;
        let expand = |q: u32| ((q << shift) | half_step) as u8;
        Rgb::new(
            expand((key >> (2 * self.bits)) & mask),
            expand((key >> self.bits) & mask),
            expand(key & mask),
        )
    }
}

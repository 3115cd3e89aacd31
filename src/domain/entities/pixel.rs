//! Pixel and pixel buffer entities
//!
//! A `PixelBuffer` is the decoded form of an image that every extraction
//! strategy consumes. It is immutable once built.

use crate::error::{ExtractionError, Result};

/// A single RGBA pixel
///
/// Alpha is only consulted to exclude transparent pixels; pixels built
/// without alpha are fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Creates an opaque pixel
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// Creates a pixel with an explicit alpha channel
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Whether the pixel takes part in an extraction with the given alpha cutoff
    #[inline]
    pub fn is_eligible(&self, ignore_alpha_below: u8) -> bool {
        self.alpha >= ignore_alpha_below
    }
}

/// Decoded image pixels in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Creates a buffer, checking that the pixel count matches the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ExtractionError::InvalidDimensions {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a buffer from packed RGB8 bytes
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 3 != 0 {
            return Err(ExtractionError::InvalidDimensions {
                width,
                height,
                actual: data.len() / 3,
            });
        }
        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Pixel::rgb(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Creates a buffer from packed RGBA8 bytes
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(ExtractionError::InvalidDimensions {
                width,
                height,
                actual: data.len() / 4,
            });
        }
        let pixels = data
            .chunks_exact(4)
            .map(|rgba| Pixel::rgba(rgba[0], rgba[1], rgba[2], rgba[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Creates a single-color buffer
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixel at (x, y), if inside the buffer
    pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// Iterates the pixels that pass the alpha cutoff
    pub fn eligible(&self, ignore_alpha_below: u8) -> impl Iterator<Item = &Pixel> {
        self.pixels
            .iter()
            .filter(move |p| p.is_eligible(ignore_alpha_below))
    }
}

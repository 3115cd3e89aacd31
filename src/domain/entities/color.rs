//! Extracted color entity
//!
//! The value returned by every extraction. Host bindings usually want the
//! color as a hex string or a packed integer, so both are provided here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Errors from parsing a hex color string
#[derive(Debug, Error, PartialEq)]
pub enum ParseColorError {
    #[error("Expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),

    #[error("Invalid hex digits: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `rrggbb`, the format the dominant color was historically reported in
    pub fn to_hex(&self) -> String {
        hex::encode([self.red, self.green, self.blue])
    }

    /// Packs the color as `0xRRGGBB`
    pub fn to_packed(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Unpacks a `0xRRGGBB` value; bits above 24 are ignored
    pub fn from_packed(value: u32) -> Self {
        Self {
            red: (value >> 16) as u8,
            green: (value >> 8) as u8,
            blue: value as u8,
        }
    }

    /// Sum of the channels, compared against brightness/darkness limits
    pub fn channel_sum(&self) -> u16 {
        self.red as u16 + self.green as u16 + self.blue as u16
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `rrggbb` or `#rrggbb`, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.red, color.green, color.blue]
    }
}

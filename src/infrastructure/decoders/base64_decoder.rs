//! Base64 payload decoder
//!
//! Unwraps standard-alphabet base64 text and hands the raw image bytes to
//! an inner decoder. Line breaks inside the payload are ignored.

use crate::domain::entities::PixelBuffer;
use crate::domain::repositories::{DecodeError, ImageDecoder};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Decoder for base64-encoded images
#[derive(Debug, Clone, Default)]
pub struct Base64Decoder<D> {
    inner: D,
}

impl<D: ImageDecoder> Base64Decoder<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Decodes the base64 text to raw bytes
    pub fn unwrap_payload(payload: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let compact: Vec<u8> = payload
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        if compact.is_empty() {
            return Err(DecodeError::EmptyImage);
        }
        STANDARD
            .decode(&compact)
            .map_err(|e| DecodeError::Malformed(format!("invalid base64: {}", e)))
    }
}

impl<D: ImageDecoder> ImageDecoder for Base64Decoder<D> {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        let raw = Self::unwrap_payload(bytes)?;
        log::debug!("Unwrapped {} base64 bytes to {}", bytes.len(), raw.len());
        self.inner.decode(&raw)
    }

    fn name(&self) -> &'static str {
        "base64"
    }
}

//! Image decoders

mod base64_decoder;
mod image_crate_decoder;

pub use base64_decoder::Base64Decoder;
pub use image_crate_decoder::{ImageCrateDecoder, SUPPORTED_FORMATS};

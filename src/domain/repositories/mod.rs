//! Repository traits (interfaces)
//!
//! These traits define the contracts for external collaborators.

mod image_decoder;

pub use image_decoder::{DecodeError, ImageDecoder};

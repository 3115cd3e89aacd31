//! Application layer
//!
//! Use cases that orchestrate decoding and extraction.

pub mod dto;
mod extract_dominant_color;

pub use extract_dominant_color::{extract_dominant_color, ExtractDominantColorUseCase};

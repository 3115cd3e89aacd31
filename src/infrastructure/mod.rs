//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.
//! This layer contains the image codec dependencies.

pub mod decoders;

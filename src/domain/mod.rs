//! Domain layer - Core extraction logic
//!
//! This module contains the pixel and color entities, the decoder
//! contract, and the extraction strategies. It does no I/O.

pub mod entities;
pub mod repositories;
pub mod services;

use crate::domain::repositories::DecodeError;
use thiserror::Error;

/// Errors that can occur while extracting a dominant color
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No eligible pixels: the buffer is empty or every pixel was excluded")]
    EmptyInput,

    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfig {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Pixel count {actual} does not match dimensions {width}x{height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl ExtractionError {
    pub(crate) fn invalid_config(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidConfig {
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

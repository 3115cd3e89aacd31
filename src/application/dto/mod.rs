//! Data Transfer Objects

mod extraction_options;
mod extraction_report;

pub use extraction_options::{ConfigError, ExtractionOptions, Strategy};
pub use extraction_report::ExtractionReport;

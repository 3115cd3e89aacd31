//! Application layer tests
//!
//! Tests for extraction options, JSON configuration and the use case.

use dominant_color::application::dto::{ConfigError, ExtractionOptions, Strategy};
use dominant_color::domain::entities::{Pixel, PixelBuffer, Rgb};
use dominant_color::domain::repositories::{DecodeError, ImageDecoder};
use dominant_color::{extract_dominant_color, ExtractDominantColorUseCase, ExtractionError, KMeansParams};
use rstest::*;
use std::fs;
use tempfile::TempDir;

/// Decoder that ignores its input and hands back a fixed buffer
struct FixedDecoder(PixelBuffer);

impl ImageDecoder for FixedDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::EmptyImage);
        }
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[fixture]
fn red_and_blue() -> PixelBuffer {
    PixelBuffer::new(
        2,
        2,
        vec![
            Pixel::rgb(255, 0, 0),
            Pixel::rgb(255, 0, 0),
            Pixel::rgb(255, 0, 0),
            Pixel::rgb(0, 0, 255),
        ],
    )
    .unwrap()
}

#[fixture]
fn config_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// ExtractionOptions Tests
// ============================================================================

#[rstest]
fn test_options_from_json_file(config_dir: TempDir) {
    let path = config_dir.path().join("extraction.json");
    fs::write(
        &path,
        r#"{
            "strategy": "kmeans",
            "ignore_alpha_below": 1,
            "sample_size": 128,
            "kmeans": { "cluster_count": 3, "max_brightness": 600 }
        }"#,
    )
    .unwrap();

    let options = ExtractionOptions::from_json_file(&path).unwrap();
    assert_eq!(options.strategy, Strategy::KMeans);
    assert_eq!(options.ignore_alpha_below, 1);
    assert_eq!(options.sample_size, Some(128));
    assert_eq!(options.kmeans.cluster_count, 3);
    assert_eq!(options.kmeans.max_brightness, 600);
    assert_eq!(options.kmeans.max_darkness, 100);
}

#[rstest]
fn test_options_file_roundtrip(config_dir: TempDir) {
    let path = config_dir.path().join("saved.json");
    let options = ExtractionOptions::default()
        .with_quantization_bits(4)
        .with_alpha_threshold(32);
    fs::write(&path, options.to_json_string().unwrap()).unwrap();
    assert_eq!(ExtractionOptions::from_json_file(&path).unwrap(), options);
}

#[rstest]
fn test_missing_config_file(config_dir: TempDir) {
    let result = ExtractionOptions::from_json_file(&config_dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[rstest]
#[case(r#"{ "quantization_bits": 0 }"#)]
#[case(r#"{ "quantization_bits": 9 }"#)]
#[case(r#"{ "sample_size": 0 }"#)]
#[case(r#"{ "strategy": "kmeans", "kmeans": { "max_iterations": 0 } }"#)]
#[case(r#"{ "strategy": "kmeans", "quantization_bits": 0 }"#)]
#[case(r#"{ "strategy": "kmeans", "quantization_bits": 9 }"#)]
fn test_invalid_config_rejected(#[case] json: &str) {
    assert!(matches!(
        ExtractionOptions::from_json_str(json),
        Err(ConfigError::Invalid(ExtractionError::InvalidConfig { .. }))
    ));
}

#[rstest]
fn test_unknown_strategy() {
    assert!(matches!(
        ExtractionOptions::from_json_str(r#"{ "strategy": "median-cut" }"#),
        Err(ConfigError::Parse(_))
    ));
}

// ============================================================================
// extract_dominant_color Tests
// ============================================================================

#[rstest]
#[case(Strategy::Histogram, Rgb::new(252, 4, 4))]
#[case(Strategy::KMeans, Rgb::new(255, 0, 0))]
fn test_free_function(red_and_blue: PixelBuffer, #[case] strategy: Strategy, #[case] expected: Rgb) {
    let options = ExtractionOptions::default().with_strategy(strategy);
    assert_eq!(extract_dominant_color(&red_and_blue, &options).unwrap(), expected);
}

#[rstest]
#[case(Strategy::Histogram, 0)]
#[case(Strategy::Histogram, 9)]
#[case(Strategy::KMeans, 0)]
#[case(Strategy::KMeans, 9)]
fn test_free_function_validates_bits(
    red_and_blue: PixelBuffer,
    #[case] strategy: Strategy,
    #[case] bits: u8,
) {
    let options = ExtractionOptions::default()
        .with_strategy(strategy)
        .with_quantization_bits(bits);
    assert!(matches!(
        extract_dominant_color(&red_and_blue, &options),
        Err(ExtractionError::InvalidConfig { .. })
    ));
}

#[rstest]
fn test_deterministic_across_calls(red_and_blue: PixelBuffer) {
    let options = ExtractionOptions::default();
    let first = extract_dominant_color(&red_and_blue, &options).unwrap();
    for _ in 0..10 {
        assert_eq!(extract_dominant_color(&red_and_blue, &options).unwrap(), first);
    }
}

// ============================================================================
// ExtractDominantColorUseCase Tests
// ============================================================================

#[rstest]
fn test_use_case_report(red_and_blue: PixelBuffer) {
    let use_case =
        ExtractDominantColorUseCase::new(FixedDecoder(red_and_blue), ExtractionOptions::default())
            .unwrap();
    let report = use_case.execute(b"anything").unwrap();

    assert_eq!(report.color, Rgb::new(252, 4, 4));
    assert_eq!(report.hex(), "fc0404");
    assert_eq!(report.strategy, Strategy::Histogram);
    assert_eq!((report.width, report.height), (2, 2));
    assert_eq!(report.eligible_pixels, 4);
    assert_eq!(report.dominant_pixels, 3);
    assert_eq!(report.groups, 2);
    assert!((report.coverage() - 0.75).abs() < f64::EPSILON);
    assert!(report.summary().contains("#fc0404"));
}

#[rstest]
fn test_use_case_kmeans_options(red_and_blue: PixelBuffer) {
    let options = ExtractionOptions::default()
        .with_strategy(Strategy::KMeans)
        .with_kmeans(KMeansParams {
            cluster_count: 2,
            ..Default::default()
        });
    let use_case = ExtractDominantColorUseCase::new(FixedDecoder(red_and_blue), options).unwrap();
    let report = use_case.execute(b"anything").unwrap();
    assert_eq!(report.strategy, Strategy::KMeans);
    assert_eq!(report.color, Rgb::new(255, 0, 0));
}

#[rstest]
fn test_use_case_execute_buffer(red_and_blue: PixelBuffer) {
    let use_case = ExtractDominantColorUseCase::new(
        FixedDecoder(PixelBuffer::filled(1, 1, Pixel::rgb(0, 0, 0))),
        ExtractionOptions::default(),
    )
    .unwrap();
    let report = use_case.execute_buffer(&red_and_blue).unwrap();
    assert_eq!(report.color, Rgb::new(252, 4, 4));
}

#[rstest]
fn test_use_case_decode_failure(red_and_blue: PixelBuffer) {
    let use_case =
        ExtractDominantColorUseCase::new(FixedDecoder(red_and_blue), ExtractionOptions::default())
            .unwrap();
    assert!(matches!(
        use_case.execute(&[]),
        Err(ExtractionError::Decode(DecodeError::EmptyImage))
    ));
}

#[rstest]
fn test_use_case_batch(red_and_blue: PixelBuffer) {
    let use_case =
        ExtractDominantColorUseCase::new(FixedDecoder(red_and_blue), ExtractionOptions::default())
            .unwrap();
    let images: Vec<&[u8]> = vec![&b"a"[..], &b""[..], &b"c"[..], &b"d"[..]];
    let results = use_case.execute_batch(&images);

    assert_eq!(results.len(), 4);
    assert!(results[1].is_err());
    for index in [0, 2, 3] {
        assert_eq!(results[index].as_ref().unwrap().color, Rgb::new(252, 4, 4));
    }
}

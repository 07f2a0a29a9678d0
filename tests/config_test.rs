//! Comprehensive unit tests for config.rs module

use mood_meter::classify::Granularity;
use mood_meter::config::AppConfig;

#[test]
fn test_default_logging_config() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_path, None);
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_default_analysis_config() {
    let config = AppConfig::default();

    assert_eq!(config.analysis.granularity, "fine");
    assert_eq!(config.analysis.min_text_length, 3);
    assert_eq!(config.analysis.display_decimals, 3);
}

#[test]
fn test_default_export_config() {
    let config = AppConfig::default();

    assert_eq!(config.export.output_directory, "./output");
    assert_eq!(config.export.default_output_file, "sentiment_results.csv");
}

#[test]
fn test_config_validation_success() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_invalid_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "invalid".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_valid_log_levels() {
    let valid_levels = vec!["trace", "debug", "info", "warn", "error"];
    for level in valid_levels {
        let mut config = AppConfig::default();
        config.logging.level = level.to_string();
        assert!(config.validate().is_ok(), "Failed for level: {}", level);
    }
}

#[test]
fn test_config_validation_invalid_log_format() {
    let mut config = AppConfig::default();
    config.logging.format = "xml".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_invalid_granularity() {
    let mut config = AppConfig::default();
    config.analysis.granularity = "medium".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_valid_granularities() {
    for granularity in ["fine", "coarse"] {
        let mut config = AppConfig::default();
        config.analysis.granularity = granularity.to_string();
        assert!(
            config.validate().is_ok(),
            "Failed for granularity: {}",
            granularity
        );
    }
}

#[test]
fn test_config_validation_min_text_length_too_large() {
    let mut config = AppConfig::default();
    config.analysis.min_text_length = 10_001;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_empty_output_directory() {
    let mut config = AppConfig::default();
    config.export.output_directory = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_get_granularity() {
    let mut config = AppConfig::default();
    assert_eq!(config.get_granularity(), Granularity::Fine);

    config.analysis.granularity = "coarse".to_string();
    assert_eq!(config.get_granularity(), Granularity::Coarse);
}

#[test]
fn test_yaml_round_trip() {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).expect("serialize failed");
    let restored: AppConfig = serde_yaml::from_str(&yaml).expect("deserialize failed");

    assert_eq!(restored.logging.level, config.logging.level);
    assert_eq!(restored.analysis.granularity, config.analysis.granularity);
    assert_eq!(
        restored.export.default_output_file,
        config.export.default_output_file
    );
}

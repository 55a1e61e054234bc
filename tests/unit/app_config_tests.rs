/*!
 * Tests for application configuration functionality
 */

use std::fs;
use anyhow::Result;
use log::LevelFilter;
use subreader::app_config::{Config, LogLevel, OutputConfig};
use subreader::errors::AppError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.output.suffix, "clean");
    assert_eq!(config.output.extension, "vtt");
    assert!(config.output.report_skipped);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withInvalidNameParts_shouldFail() {
    let mut config = Config::default();

    config.output.suffix = String::new();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    config.output.suffix = "a.b".to_string();
    assert!(config.validate().is_err());

    config.output.suffix = "../escape".to_string();
    assert!(config.validate().is_err());

    config.output.suffix = "fixed".to_string();
    config.output.extension = String::new();
    assert!(config.validate().is_err());

    config.output.extension = "webvtt".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_log_level_withEachVariant_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "log_level": "debug", "output": { "suffix": "fixed" } }"#)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(
        config.output,
        OutputConfig {
            suffix: "fixed".to_string(),
            extension: "vtt".to_string(),
            report_skipped: true,
        }
    );

    Ok(())
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let written: Config = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(written, Config::default());

    Ok(())
}

#[test]
fn test_load_or_create_withExistingFile_shouldLoadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "log_level": "warn", "output": { "report_skipped": false } }"#,
    )?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(!config.output.report_skipped);

    Ok(())
}

#[test]
fn test_load_or_create_withInvalidValues_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let bad_json = common::create_test_file(temp_dir.path(), "bad.json", "{ not json")?;
    assert!(Config::load_or_create(&bad_json).is_err());

    let bad_suffix = common::create_test_file(temp_dir.path(), "suffix.json", r#"{ "output": { "suffix": "" } }"#)?;
    assert!(Config::load_or_create(&bad_suffix).is_err());

    Ok(())
}

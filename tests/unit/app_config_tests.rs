/*!
 * Tests for application configuration
 */

use anyhow::Result;
use genko::app_config::{Config, DirectoryOverride, LogLevel, DIRECTORY_CONFIG_FILENAME};
use crate::common;

/// Test the default configuration values
#[test]
fn test_config_default_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert!(config.enabled);
    assert_eq!(config.target_words, 5000);
    assert_eq!(config.min_words, None);
    assert!(config.show_in_status_bar);
    assert!(!config.show_background_color);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test parsing an empty object falls back to defaults for every field
#[test]
fn test_config_parse_withEmptyObject_shouldFallBackToDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert!(config.enabled);
    assert_eq!(config.target_words, 5000);
    assert!(config.show_in_status_bar);
}

/// Test saving and loading a configuration file
#[test]
fn test_config_saveAndLoad_withTempFile_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_words = 12000;
    config.min_words = Some(3000);
    config.save_to_file(&config_path)?;

    let loaded = Config::from_file(&config_path)?;
    assert_eq!(loaded.target_words, 12000);
    assert_eq!(loaded.min_words, Some(3000));

    Ok(())
}

/// Test loading a missing configuration file fails
#[test]
fn test_config_from_file_withMissingFile_shouldReturnError() {
    let result = Config::from_file("/nonexistent/conf.json");
    assert!(result.is_err());
}

/// Test validation rejects a minimum above the target
#[test]
fn test_config_validate_withMinAboveTarget_shouldReturnError() {
    let mut config = Config::default();
    config.target_words = 1000;
    config.min_words = Some(2000);

    assert!(config.validate().is_err());
}

/// Test validation accepts consistent thresholds
#[test]
fn test_config_validate_withConsistentThresholds_shouldSucceed() {
    let mut config = Config::default();
    config.target_words = 10000;
    config.min_words = Some(2000);

    assert!(config.validate().is_ok());
}

/// Test validation skips the check when the target is unset
#[test]
fn test_config_validate_withZeroTarget_shouldSucceed() {
    let mut config = Config::default();
    config.target_words = 0;
    config.min_words = Some(2000);

    assert!(config.validate().is_ok());
}

/// Test directory override parsing uses camelCase keys
#[test]
fn test_directory_override_parse_withCamelCaseKeys_shouldFillFields() {
    let overrides: DirectoryOverride =
        serde_json::from_str(r#"{"targetWords": 10000, "minWords": 100}"#).unwrap();

    assert_eq!(overrides.target_words, Some(10000));
    assert_eq!(overrides.min_words, Some(100));
    assert_eq!(overrides.enabled, None);
    assert_eq!(overrides.show_background_color, None);
}

/// Test override application: present keys win, absent keys fall back
#[test]
fn test_config_with_directory_override_shouldApplyPresentKeysOnly() {
    let config = Config::default();
    let overrides = DirectoryOverride {
        enabled: Some(false),
        target_words: Some(8000),
        min_words: None,
        show_background_color: None,
    };

    let merged = config.with_directory_override(&overrides);
    assert!(!merged.enabled);
    assert_eq!(merged.target_words, 8000);
    // Untouched fields keep the global values
    assert_eq!(merged.min_words, config.min_words);
    assert_eq!(merged.show_background_color, config.show_background_color);
}

/// Test loading the override file next to a manuscript
#[test]
fn test_directory_override_load_for_withOverrideFile_shouldLoadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(
        &dir,
        DIRECTORY_CONFIG_FILENAME,
        r#"{"enabled": false, "targetWords": 777}"#,
    )?;
    let manuscript = common::create_test_manuscript(&dir, "chapter01.md")?;

    let overrides = DirectoryOverride::load_for(&manuscript).expect("override should load");
    assert_eq!(overrides.enabled, Some(false));
    assert_eq!(overrides.target_words, Some(777));

    Ok(())
}

/// Test a missing override file is treated as no override
#[test]
fn test_directory_override_load_for_withMissingFile_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let manuscript = common::create_test_manuscript(&temp_dir.path().to_path_buf(), "a.md")?;

    assert_eq!(DirectoryOverride::load_for(&manuscript), None);

    Ok(())
}

/// Test malformed override JSON is treated as no override
#[test]
fn test_directory_override_load_for_withMalformedJson_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, DIRECTORY_CONFIG_FILENAME, "{ not json")?;
    let manuscript = common::create_test_manuscript(&dir, "a.md")?;

    assert_eq!(DirectoryOverride::load_for(&manuscript), None);

    Ok(())
}

/// Test log level conversion to level filters
#[test]
fn test_log_level_to_level_filter_shouldMapAllLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

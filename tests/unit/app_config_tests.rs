/*!
 * Tests for application configuration
 */

use anyhow::Result;
use reflow_mobile::app_config::{Config, LogLevel, OutputFormat};
use reflow_mobile::reflow::BreakToken;
use reflow_mobile::{AppError, ConfigError, ReflowError};

use crate::common;

/// Test that a saved config loads back with the same values
#[test]
fn test_saveAndLoad_withCustomValues_shouldPreserveThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("reflow.json");

    let mut config = Config::default();
    config.reflow.target_length = 20;
    config.reflow.preserve_long_headings = true;
    config.output.format = OutputFormat::Json;
    config.log_level = LogLevel::Debug;
    config.break_tokens = Some(vec![BreakToken::new(", ", 0), BreakToken::new("and ", 1)]);
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;

    assert_eq!(loaded.reflow, config.reflow);
    assert_eq!(loaded.output.format, OutputFormat::Json);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    assert_eq!(loaded.break_tokens, config.break_tokens);

    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrDefault_withMissingFile_shouldCreateDefaultFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing.json");

    let config = Config::load_or_default(&path)?;

    assert!(path.exists());
    assert_eq!(config.reflow.target_length, 25);
    assert!(Config::from_file(&path)?.validate().is_ok());

    Ok(())
}

/// Test that malformed JSON is reported
#[test]
fn test_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}

/// Test that inconsistent thresholds fail validation
#[test]
fn test_validate_withClauseBelowTarget_shouldFail() {
    let mut config = Config::default();
    config.reflow.clause_max_length = 10;

    let error = config.validate().unwrap_err();
    assert!(matches!(
        error,
        AppError::Config(ConfigError::InvalidThreshold {
            name: "clause_max_length",
            ..
        })
    ));
    assert!(error.to_string().contains("clause_max_length"));
}

/// Test that an empty output suffix is rejected
#[test]
fn test_validate_withBlankSuffix_shouldFail() {
    let mut config = Config::default();
    config.output.suffix = "  ".to_string();

    assert!(matches!(
        config.validate(),
        Err(AppError::Config(ConfigError::EmptyOutputSuffix))
    ));
}

/// Test that a config with an empty token fails to build an engine
#[test]
fn test_buildEngine_withEmptyToken_shouldFail() {
    let config = Config {
        break_tokens: Some(vec![BreakToken::new("", 0)]),
        ..Default::default()
    };

    assert!(matches!(
        config.build_engine(),
        Err(AppError::Config(ConfigError::EmptyToken(0)))
    ));
}

/// Test that unvalidated bad thresholds are rejected when building the engine
#[test]
fn test_buildEngine_withZeroTarget_shouldReportReflowConfigError() {
    let mut config = Config::default();
    config.reflow.target_length = 0;

    assert!(matches!(
        config.build_engine(),
        Err(AppError::Reflow(ReflowError::Config(ConfigError::InvalidThreshold {
            name: "target_length",
            ..
        })))
    ));
}

/// Test that oversized thresholds load, validate and reflow without failing
#[test]
fn test_buildEngine_withMaxSizedThresholds_shouldReflowWithoutFallback() -> Result<()> {
    let config: Config = serde_json::from_str(
        r#"{"reflow": {"window_trail": 18446744073709551615, "tolerance": 18446744073709551615}}"#,
    )?;
    config.validate()?;
    let engine = config.build_engine()?;

    let line = "이것은 매우 긴 일반 문장으로서 분리가 필요한 예시 텍스트입니다";
    let outcome = engine.reflow_outcome(line);

    assert!(!outcome.is_degraded());
    assert_eq!(outcome.output, format!("<normal>{}</normal>", line));

    Ok(())
}

/// Test that the engine built from config carries its settings
#[test]
fn test_buildEngine_withDefaults_shouldUseKoreanTable() -> Result<()> {
    let engine = Config::default().build_engine()?;

    assert_eq!(engine.settings().target_length, 25);
    assert_eq!(engine.tokens().iter().next(), Some(", "));

    Ok(())
}

/// Test the log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMatch() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

/// Test output format extensions used for written files
#[test]
fn test_outputFormat_extension_shouldMatchFormat() {
    assert_eq!(OutputFormat::Markup.extension(), "markup");
    assert_eq!(OutputFormat::Plain.extension(), "txt");
    assert_eq!(OutputFormat::Json.extension(), "json");
    assert_eq!(OutputFormat::Plain.to_string(), "plain");
}

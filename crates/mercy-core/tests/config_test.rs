use std::collections::HashMap;

use mercy_core::config::*;
use mercy_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EngineConfig::from_toml("").unwrap();

    assert_eq!(config.severity.high, 200);
    assert_eq!(config.severity.medium, 80);
    assert_eq!(config.severity.low, 1);
    assert!(config.mode.detect_explain);
    assert_eq!(config.evidence.limit, 50);
    assert!(!config.fallback.demo_on_empty);
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[severity]
medium = 100

[fallback]
demo_on_empty = true
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.severity.medium, 100);
    // Non-overridden fields keep defaults
    assert_eq!(config.severity.high, 200);
    assert_eq!(config.severity.low, 1);
    assert!(config.fallback.demo_on_empty);
    assert_eq!(config.evidence.limit, 50);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = EngineConfig::from_toml("[severity\nhigh = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = EngineConfig::from_toml("[severity]\nhigh = \"lots\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_low_threshold_fails_validation() {
    let mut config = EngineConfig::default();
    config.severity.low = 0;
    match config.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "severity.low"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn toml_with_zero_low_threshold_is_rejected() {
    match EngineConfig::from_toml("[severity]\nlow = 0").unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "severity.low"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn toml_with_unordered_thresholds_is_rejected() {
    let err = EngineConfig::from_toml("[severity]\nhigh = 50").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = EngineConfig::from_toml("[evidence]\nlimit = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn thresholds_must_be_ordered() {
    let mut config = EngineConfig::default();
    config.severity.medium = 300;
    match config.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "severity.high"),
        other => panic!("unexpected error: {other}"),
    }

    let mut config = EngineConfig::default();
    config.severity.low = 90;
    match config.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "severity.medium"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn equal_thresholds_are_allowed() {
    let mut config = EngineConfig::default();
    config.severity = SeverityThresholds {
        high: 10,
        medium: 10,
        low: 10,
    };
    assert!(config.validate().is_ok());
}

#[test]
fn evidence_limit_is_bounded() {
    let mut config = EngineConfig::default();
    config.evidence.limit = 0;
    assert!(config.validate().is_err());
    config.evidence.limit = 1001;
    assert!(config.validate().is_err());
    config.evidence.limit = 1000;
    assert!(config.validate().is_ok());
}

#[test]
fn env_overrides_apply_and_ignore_garbage() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("MERCY_SEVERITY_HIGH", " 300 "),
        ("MERCY_SEVERITY_MEDIUM", "not-a-number"),
        ("MERCY_EVIDENCE_LIMIT", "10"),
        ("MERCY_DEMO_ON_EMPTY", "yes"),
    ]);
    let mut config = EngineConfig::default();
    config.apply_overrides_from(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.severity.high, 300);
    assert_eq!(config.severity.medium, 80);
    assert_eq!(config.severity.low, 1);
    assert_eq!(config.evidence.limit, 10);
    assert!(config.fallback.demo_on_empty);
}

#[test]
fn load_without_file_uses_defaults() {
    let config = EngineConfig::load(None).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn load_missing_file_is_file_not_found() {
    let path = std::path::Path::new("/definitely/not/here/mercy.toml");
    let err = EngineConfig::load(Some(path)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_roundtrips_through_toml() {
    let mut config = EngineConfig::default();
    config.severity.high = 250;
    let text = toml::to_string(&config).unwrap();
    let back = EngineConfig::from_toml(&text).unwrap();
    assert_eq!(back.severity, config.severity);
}

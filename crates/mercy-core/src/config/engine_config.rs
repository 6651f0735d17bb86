//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EvidenceConfig, FallbackConfig, ModeConfig, SeverityThresholds};
use crate::constants::MAX_EVIDENCE_LIMIT;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MERCY_*`)
/// 2. Config file (`mercy.toml`, when given)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub severity: SeverityThresholds,
    pub mode: ModeConfig,
    pub evidence: EvidenceConfig,
    pub fallback: FallbackConfig,
}

impl EngineConfig {
    /// Load configuration: defaults, then `path` if given, then env overrides.
    /// The result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep defaults.
    /// The result is validated before it is returned.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `MERCY_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply `MERCY_*` overrides from an arbitrary lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MERCY_SEVERITY_HIGH").and_then(|s| s.trim().parse().ok()) {
            self.severity.high = v;
        }
        if let Some(v) = lookup("MERCY_SEVERITY_MEDIUM").and_then(|s| s.trim().parse().ok()) {
            self.severity.medium = v;
        }
        if let Some(v) = lookup("MERCY_SEVERITY_LOW").and_then(|s| s.trim().parse().ok()) {
            self.severity.low = v;
        }
        if let Some(v) = lookup("MERCY_EVIDENCE_LIMIT").and_then(|s| s.trim().parse().ok()) {
            self.evidence.limit = v;
        }
        if let Some(v) = lookup("MERCY_DEMO_ON_EMPTY").and_then(|s| parse_bool(&s)) {
            self.fallback.demo_on_empty = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.severity;
        if s.low == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "severity.low".to_string(),
                message: "must be at least 1 so a zero score stays None".to_string(),
            });
        }
        if s.medium < s.low {
            return Err(ConfigError::ValidationFailed {
                field: "severity.medium".to_string(),
                message: format!("must be >= severity.low ({})", s.low),
            });
        }
        if s.high < s.medium {
            return Err(ConfigError::ValidationFailed {
                field: "severity.high".to_string(),
                message: format!("must be >= severity.medium ({})", s.medium),
            });
        }
        if self.evidence.limit == 0 || self.evidence.limit > MAX_EVIDENCE_LIMIT {
            return Err(ConfigError::ValidationFailed {
                field: "evidence.limit".to_string(),
                message: format!("must be between 1 and {MAX_EVIDENCE_LIMIT}"),
            });
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

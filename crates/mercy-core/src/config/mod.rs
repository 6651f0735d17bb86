//! Engine configuration: severity thresholds, mode detection, evidence
//! limits, and the row-source fallback policy.

pub mod defaults;
pub mod engine_config;
pub mod evidence_config;
pub mod fallback_config;
pub mod mode_config;
pub mod severity_config;

pub use engine_config::EngineConfig;
pub use evidence_config::EvidenceConfig;
pub use fallback_config::FallbackConfig;
pub use mode_config::ModeConfig;
pub use severity_config::SeverityThresholds;

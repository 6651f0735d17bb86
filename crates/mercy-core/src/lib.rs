//! # mercy-core
//!
//! Foundation crate for the Mercy decision engine.
//! Defines the decision types, config, errors, field-name constants,
//! and row-source traits. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{MercyError, MercyResult};
pub use models::{
    ConfidenceLabel, EvidenceEntry, NormalizedDecision, ProductionStatus, SeverityLabel,
    SourceMode, TrendLabel,
};

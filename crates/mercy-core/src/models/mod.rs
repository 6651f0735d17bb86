//! Decision and evidence records plus the closed label enums they carry.

pub mod decision;
pub mod evidence;
pub mod labels;
pub mod mode;

pub use decision::NormalizedDecision;
pub use evidence::EvidenceEntry;
pub use labels::{ConfidenceLabel, ProductionStatus, SeverityLabel, TrendLabel};
pub use mode::SourceMode;

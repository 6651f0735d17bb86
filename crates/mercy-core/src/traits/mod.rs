//! Row-source seams. Storage, transport, and access control live behind
//! these traits; the engine only sees materialized `serde_json::Value` rows.

pub mod decision_source;
pub mod evidence_source;

pub use decision_source::{DecisionView, IDecisionSource, RowFilter};
pub use evidence_source::{IEvidenceSource, EVIDENCE_VIEW};

use serde::{Deserialize, Serialize};

use crate::constants::SYNTHESIZED_ID_PREFIX;

/// One entry on a signal's evidence timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub id: String,
    pub signal_id: Option<String>,
    pub body: Option<String>,
    pub source: Option<String>,
    /// ISO-8601 timestamp, as supplied by the source.
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub kind: Option<String>,
    pub severity: Option<String>,
    pub area: Option<String>,
    pub is_production_issue: Option<bool>,
    pub production_issue_score: Option<f64>,
    pub production_issue_reason: Option<String>,
}

impl EvidenceEntry {
    pub fn has_synthesized_id(&self) -> bool {
        self.id.starts_with(SYNTHESIZED_ID_PREFIX)
    }
}

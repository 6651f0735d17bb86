use serde::{Deserialize, Serialize};

use super::labels::{ConfidenceLabel, ProductionStatus, SeverityLabel, TrendLabel};
use crate::constants::SYNTHESIZED_ID_PREFIX;

/// A fully-populated, UI-ready production decision.
///
/// Built fresh from a raw row on every normalization pass. Every field is
/// total: missing or malformed source values have already been replaced
/// by their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDecision {
    /// Never empty. Synthesized ids carry the `missing:` prefix.
    pub signal_id: String,
    pub prod_issues_24h: u64,
    pub prod_issues_7d: u64,
    /// ISO-8601 timestamp, as supplied by the source.
    pub last_prod_issue_at: Option<String>,
    pub minutes_since_last_prod_issue: Option<f64>,
    pub production_status: ProductionStatus,
    pub severity_score_7d: u64,
    pub suggested_action_code: Option<String>,
    pub suggested_action_text: Option<String>,
    pub status_reason_code: Option<String>,
    pub severity_label: SeverityLabel,
    pub trend_label: Option<TrendLabel>,
    pub confidence_label: Option<ConfidenceLabel>,
}

impl NormalizedDecision {
    /// Whether `signal_id` was synthesized from row content.
    pub fn has_synthesized_id(&self) -> bool {
        self.signal_id.starts_with(SYNTHESIZED_ID_PREFIX)
    }
}

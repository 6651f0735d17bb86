//! Label derivation.
//!
//! Severity is always populated. A valid explicit label other than `None`
//! wins; otherwise the label is recomputed from `severity_score_7d`.
//! An explicit `"None"` counts as not supplied and is always recomputed,
//! so the label tracks the current score unless a stronger one overrides it.

use mercy_core::config::SeverityThresholds;
use mercy_core::models::{NormalizedDecision, SeverityLabel};

use crate::coercion::CoercedRow;

/// Band a score with the default thresholds (200 / 80 / 1).
pub fn derive_severity_label(score: u64) -> SeverityLabel {
    derive_severity_label_with(score, &SeverityThresholds::default())
}

/// Band a score. First match wins: high, then medium, then low.
pub fn derive_severity_label_with(score: u64, thresholds: &SeverityThresholds) -> SeverityLabel {
    if score >= thresholds.high {
        SeverityLabel::High
    } else if score >= thresholds.medium {
        SeverityLabel::Medium
    } else if score >= thresholds.low {
        SeverityLabel::Low
    } else {
        SeverityLabel::None
    }
}

pub fn resolve_severity_label(
    raw: Option<SeverityLabel>,
    score: u64,
    thresholds: &SeverityThresholds,
) -> SeverityLabel {
    match raw {
        Some(label) if label != SeverityLabel::None => label,
        _ => derive_severity_label_with(score, thresholds),
    }
}

/// Finish a coerced row. Trend and confidence pass through untouched.
pub fn label(row: CoercedRow, thresholds: &SeverityThresholds) -> NormalizedDecision {
    let severity_label =
        resolve_severity_label(row.raw_severity_label, row.severity_score_7d, thresholds);

    NormalizedDecision {
        signal_id: row.signal_id,
        prod_issues_24h: row.prod_issues_24h,
        prod_issues_7d: row.prod_issues_7d,
        last_prod_issue_at: row.last_prod_issue_at,
        minutes_since_last_prod_issue: row.minutes_since_last_prod_issue,
        production_status: row.production_status,
        severity_score_7d: row.severity_score_7d,
        suggested_action_code: row.suggested_action_code,
        suggested_action_text: row.suggested_action_text,
        status_reason_code: row.status_reason_code,
        severity_label,
        trend_label: row.trend_label,
        confidence_label: row.confidence_label,
    }
}

//! The decision comparator.
//!
//! Keys, first non-equal decides:
//! 1. status urgency, descending
//! 2. `severity_score_7d`, descending
//! 3. `prod_issues_24h`, descending
//! 4. `prod_issues_7d`, descending
//! 5. `minutes_since_last_prod_issue`, ascending, unknown last
//! 6. `signal_id`, ascending, byte-wise
//!
//! Rows sharing a `signal_id` (only possible with byte-identical bad
//! input or a misbehaving source) fall through to the residual fields so
//! the order never depends on input order.

use std::cmp::Ordering;

use mercy_core::models::NormalizedDecision;

pub fn compare_decisions(a: &NormalizedDecision, b: &NormalizedDecision) -> Ordering {
    b.production_status
        .urgency()
        .cmp(&a.production_status.urgency())
        .then_with(|| b.severity_score_7d.cmp(&a.severity_score_7d))
        .then_with(|| b.prod_issues_24h.cmp(&a.prod_issues_24h))
        .then_with(|| b.prod_issues_7d.cmp(&a.prod_issues_7d))
        .then_with(|| {
            compare_recency(
                a.minutes_since_last_prod_issue,
                b.minutes_since_last_prod_issue,
            )
        })
        .then_with(|| a.signal_id.cmp(&b.signal_id))
        .then_with(|| compare_residual(a, b))
}

/// Smaller minutes first; `None` behaves as +∞.
pub fn compare_recency(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_residual(a: &NormalizedDecision, b: &NormalizedDecision) -> Ordering {
    a.severity_label
        .as_str()
        .cmp(b.severity_label.as_str())
        .then_with(|| {
            a.trend_label
                .map(|t| t.as_str())
                .cmp(&b.trend_label.map(|t| t.as_str()))
        })
        .then_with(|| {
            a.confidence_label
                .map(|c| c.as_str())
                .cmp(&b.confidence_label.map(|c| c.as_str()))
        })
        .then_with(|| a.last_prod_issue_at.cmp(&b.last_prod_issue_at))
        .then_with(|| a.status_reason_code.cmp(&b.status_reason_code))
        .then_with(|| a.suggested_action_code.cmp(&b.suggested_action_code))
        .then_with(|| a.suggested_action_text.cmp(&b.suggested_action_text))
}

//! Demo rows shown when nothing is accessible for a signal, typically an
//! unauthenticated visitor blocked by row-level security.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

/// Signal id used when the caller asked for a blank one.
pub const DEMO_SIGNAL_ID: &str = "demo-signal";

/// Reason code stamped on the demo decision.
pub const DEMO_REASON_CODE: &str = "DEMO_NO_AUTH";

/// An explain-shaped incident row for `signal_id`.
pub fn demo_decision_row(signal_id: &str) -> Value {
    json!({
        "signal_id": signal_id,
        "prod_issues_24h": 2,
        "prod_issues_7d": 9,
        "last_prod_issue_at": null,
        "minutes_since_last_prod_issue": 25,
        "severity_score_7d": 245,
        "production_status": "incident",
        "suggested_action_code": "page_oncall",
        "suggested_action_text": "Page on-call. Start incident response. Confirm impact and scope.",
        "trend_24h_vs_7d": "worsening",
        "confidence": "high",
        "severity_label": "High",
        "status_reason_code": DEMO_REASON_CODE,
    })
}

/// Three evidence rows for `signal_id`, stamped relative to `now`.
pub fn demo_evidence_rows(signal_id: &str, now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "demo-1",
            "signal_id": signal_id,
            "created_at": now.to_rfc3339(),
            "created_by": null,
            "source": "demo",
            "kind": "incident",
            "severity": "high",
            "area": "prod",
            "body": "Spike in 5xx errors after deploy; customers report checkout failures.",
            "is_production_issue": true,
            "production_issue_score": 90,
            "production_issue_reason": "Keyword match: error/5xx + prod area",
        }),
        json!({
            "id": "demo-2",
            "signal_id": signal_id,
            "created_at": (now - Duration::minutes(35)).to_rfc3339(),
            "created_by": null,
            "source": "demo",
            "kind": "observation",
            "severity": "medium",
            "area": "api",
            "body": "Latency increased in /payments endpoint; p95 doubled vs baseline.",
            "is_production_issue": true,
            "production_issue_score": 55,
            "production_issue_reason": "Heuristic: latency + payments + api",
        }),
        json!({
            "id": "demo-3",
            "signal_id": signal_id,
            "created_at": (now - Duration::minutes(90)).to_rfc3339(),
            "created_by": null,
            "source": "demo",
            "kind": "note",
            "severity": "low",
            "area": "deploy",
            "body": "Deploy 2026.01.15.1 rolled out to 100% at 10:02.",
            "is_production_issue": false,
            "production_issue_score": 0,
            "production_issue_reason": "Not classified as production issue",
        }),
    ]
}

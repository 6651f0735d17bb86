//! Evidence timeline: the signal entries behind a decision, newest first.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use mercy_core::constants::evidence_fields as f;
use mercy_core::models::EvidenceEntry;
use serde_json::Value;

use crate::coercion::identity::resolve_id;
use crate::coercion::values::{field, parse_timestamp, to_bool, to_number, to_text, to_timestamp};

/// Coerce one raw evidence row. Total, like decision coercion.
pub fn coerce_evidence(raw: &Value) -> EvidenceEntry {
    let row = raw.as_object();

    EvidenceEntry {
        id: resolve_id(raw, row, f::ID),
        signal_id: to_text(field(row, f::SIGNAL_ID)),
        body: to_text(field(row, f::BODY)),
        source: to_text(field(row, f::SOURCE)),
        created_at: to_timestamp(field(row, f::CREATED_AT)),
        created_by: to_text(field(row, f::CREATED_BY)),
        kind: to_text(field(row, f::KIND)),
        severity: to_text(field(row, f::SEVERITY)),
        area: to_text(field(row, f::AREA)),
        is_production_issue: to_bool(field(row, f::IS_PRODUCTION_ISSUE)),
        production_issue_score: to_number(field(row, f::PRODUCTION_ISSUE_SCORE)),
        production_issue_reason: to_text(field(row, f::PRODUCTION_ISSUE_REASON)),
    }
}

/// Coerce, order newest first (undated last, then by id), and keep `limit`.
pub fn build_timeline(rows: &[Value], limit: usize) -> Vec<EvidenceEntry> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, EvidenceEntry)> = rows
        .iter()
        .map(coerce_evidence)
        .map(|entry| (entry.created_at.as_deref().and_then(parse_timestamp), entry))
        .collect();
    keyed.sort_by(|(ta, a), (tb, b)| {
        compare_newest_first(*ta, *tb).then_with(|| a.id.cmp(&b.id))
    });
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

fn compare_newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

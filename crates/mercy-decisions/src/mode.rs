//! Explain-mode detection.
//!
//! A row is an explain row when any explain-only key is present, whatever
//! its value. A batch takes its mode from the first JSON-object row.

use mercy_core::constants::fields;
use mercy_core::models::SourceMode;
use serde_json::Value;

pub fn is_explain_row(raw: &Value) -> bool {
    raw.as_object()
        .is_some_and(|row| fields::EXPLAIN_ONLY.iter().any(|k| row.contains_key(*k)))
}

pub fn detect_row_mode(raw: &Value) -> SourceMode {
    if is_explain_row(raw) {
        SourceMode::Explain
    } else {
        SourceMode::Base
    }
}

/// Mode of the first object row; an empty or object-less batch is base.
pub fn detect_batch_mode(rows: &[Value]) -> SourceMode {
    rows.iter()
        .find(|r| r.is_object())
        .map_or(SourceMode::Base, detect_row_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_presence_is_enough() {
        assert!(is_explain_row(&json!({"confidence": null})));
        assert!(is_explain_row(&json!({"trend_label": "stable"})));
        assert!(!is_explain_row(&json!({"signal_id": "a"})));
        assert!(!is_explain_row(&json!(null)));
    }

    #[test]
    fn batch_mode_follows_first_object_row() {
        let rows = vec![json!(null), json!({"signal_id": "a"}), json!({"confidence": "high"})];
        assert_eq!(detect_batch_mode(&rows), SourceMode::Base);

        let rows = vec![json!(7), json!({"status_reason_code": "X"})];
        assert_eq!(detect_batch_mode(&rows), SourceMode::Explain);

        assert_eq!(detect_batch_mode(&[]), SourceMode::Base);
    }
}

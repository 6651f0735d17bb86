//! Row coercion: arbitrary JSON → strict decision fields.
//!
//! Total over every input, including `null`, arrays, scalars, and objects
//! missing every field. Each field is coerced independently.

pub mod identity;
pub mod values;

use mercy_core::config::SeverityThresholds;
use mercy_core::constants::fields;
use mercy_core::models::{
    ConfidenceLabel, NormalizedDecision, ProductionStatus, SeverityLabel, SourceMode, TrendLabel,
};
use serde_json::Value;

use crate::labels;
use crate::mode;
use values::{field, field_or_legacy, to_count, to_enum, to_number, to_text, to_timestamp};

/// A row after field coercion, before label derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedRow {
    pub signal_id: String,
    pub prod_issues_24h: u64,
    pub prod_issues_7d: u64,
    pub last_prod_issue_at: Option<String>,
    pub minutes_since_last_prod_issue: Option<f64>,
    pub production_status: ProductionStatus,
    pub severity_score_7d: u64,
    pub suggested_action_code: Option<String>,
    pub suggested_action_text: Option<String>,
    pub status_reason_code: Option<String>,
    /// Severity label as supplied, if it named a valid member.
    pub raw_severity_label: Option<SeverityLabel>,
    pub trend_label: Option<TrendLabel>,
    pub confidence_label: Option<ConfidenceLabel>,
}

/// Coerce every field of `raw`. Trend and confidence are only read in
/// explain mode; in base mode they are always `None`.
pub fn coerce_fields(raw: &Value, mode: SourceMode) -> CoercedRow {
    let row = raw.as_object();

    let (trend_label, confidence_label) = if mode.is_explain() {
        (
            to_enum(
                field_or_legacy(row, fields::TREND_24H_VS_7D, fields::LEGACY_TREND_LABEL),
                TrendLabel::from_raw,
            ),
            to_enum(
                field_or_legacy(row, fields::CONFIDENCE, fields::LEGACY_CONFIDENCE_LABEL),
                ConfidenceLabel::from_raw,
            ),
        )
    } else {
        (None, None)
    };

    CoercedRow {
        signal_id: identity::resolve_id(raw, row, fields::SIGNAL_ID),
        prod_issues_24h: to_count(field(row, fields::PROD_ISSUES_24H)),
        prod_issues_7d: to_count(field(row, fields::PROD_ISSUES_7D)),
        last_prod_issue_at: to_timestamp(field(row, fields::LAST_PROD_ISSUE_AT)),
        minutes_since_last_prod_issue: to_number(field(
            row,
            fields::MINUTES_SINCE_LAST_PROD_ISSUE,
        )),
        production_status: to_enum(
            field(row, fields::PRODUCTION_STATUS),
            ProductionStatus::from_raw,
        )
        .unwrap_or_default(),
        severity_score_7d: to_count(field(row, fields::SEVERITY_SCORE_7D)),
        suggested_action_code: to_text(field(row, fields::SUGGESTED_ACTION_CODE)),
        suggested_action_text: to_text(field_or_legacy(
            row,
            fields::SUGGESTED_ACTION_TEXT,
            fields::LEGACY_ACTION_HINT,
        )),
        status_reason_code: to_text(field_or_legacy(
            row,
            fields::STATUS_REASON_CODE,
            fields::LEGACY_STATUS_REASON,
        )),
        raw_severity_label: to_enum(field(row, fields::SEVERITY_LABEL), SeverityLabel::from_raw),
        trend_label,
        confidence_label,
    }
}

/// Coerce and label one row under an already-resolved mode.
pub fn coerce_with(
    raw: &Value,
    mode: SourceMode,
    thresholds: &SeverityThresholds,
) -> NormalizedDecision {
    labels::label(coerce_fields(raw, mode), thresholds)
}

/// Coerce and label a standalone row with default thresholds. The row's
/// own keys decide whether explain fields are read.
pub fn coerce(raw: &Value) -> NormalizedDecision {
    coerce_with(raw, mode::detect_row_mode(raw), &SeverityThresholds::default())
}

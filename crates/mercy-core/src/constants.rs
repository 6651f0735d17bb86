/// Prefix marking a `signal_id` synthesized from row content.
pub const SYNTHESIZED_ID_PREFIX: &str = "missing:";

/// Number of lowercase hex characters in a synthesized id digest.
pub const SYNTHESIZED_ID_HEX_LEN: usize = 8;

/// Upper bound accepted for `evidence.limit`.
pub const MAX_EVIDENCE_LIMIT: usize = 1000;

/// Raw row field names, as produced by the decision views.
pub mod fields {
    pub const SIGNAL_ID: &str = "signal_id";
    pub const PROD_ISSUES_24H: &str = "prod_issues_24h";
    pub const PROD_ISSUES_7D: &str = "prod_issues_7d";
    pub const LAST_PROD_ISSUE_AT: &str = "last_prod_issue_at";
    pub const MINUTES_SINCE_LAST_PROD_ISSUE: &str = "minutes_since_last_prod_issue";
    pub const SEVERITY_SCORE_7D: &str = "severity_score_7d";
    pub const PRODUCTION_STATUS: &str = "production_status";
    pub const SUGGESTED_ACTION_CODE: &str = "suggested_action_code";
    pub const SUGGESTED_ACTION_TEXT: &str = "suggested_action_text";

    // Explain view only.
    pub const TREND_24H_VS_7D: &str = "trend_24h_vs_7d";
    pub const CONFIDENCE: &str = "confidence";
    pub const SEVERITY_LABEL: &str = "severity_label";
    pub const STATUS_REASON_CODE: &str = "status_reason_code";

    // Legacy names still emitted by older views.
    pub const LEGACY_TREND_LABEL: &str = "trend_label";
    pub const LEGACY_CONFIDENCE_LABEL: &str = "confidence_label";
    pub const LEGACY_STATUS_REASON: &str = "status_reason";
    pub const LEGACY_ACTION_HINT: &str = "action_hint";

    /// Keys whose presence on a row marks the batch as explain mode.
    pub const EXPLAIN_ONLY: [&str; 7] = [
        TREND_24H_VS_7D,
        CONFIDENCE,
        SEVERITY_LABEL,
        STATUS_REASON_CODE,
        LEGACY_TREND_LABEL,
        LEGACY_CONFIDENCE_LABEL,
        LEGACY_STATUS_REASON,
    ];
}

/// Evidence row field names.
pub mod evidence_fields {
    pub const ID: &str = "id";
    pub const SIGNAL_ID: &str = "signal_id";
    pub const BODY: &str = "body";
    pub const SOURCE: &str = "source";
    pub const CREATED_AT: &str = "created_at";
    pub const CREATED_BY: &str = "created_by";
    pub const KIND: &str = "kind";
    pub const SEVERITY: &str = "severity";
    pub const AREA: &str = "area";
    pub const IS_PRODUCTION_ISSUE: &str = "is_production_issue";
    pub const PRODUCTION_ISSUE_SCORE: &str = "production_issue_score";
    pub const PRODUCTION_ISSUE_REASON: &str = "production_issue_reason";
}

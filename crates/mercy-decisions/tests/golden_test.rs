//! Golden batches under test-fixtures/decisions.

use mercy_core::models::SourceMode;
use mercy_decisions::engine::{DecisionBatch, DecisionEngine};
use serde_json::Value;

fn run(fixture: &str) -> (DecisionBatch, Value) {
    let rows = test_fixtures::load_rows(fixture);
    let expected = test_fixtures::load_fixture_value(fixture)["expected"].clone();
    (DecisionEngine::default().normalize(&rows, None), expected)
}

fn expected_mode(expected: &Value) -> SourceMode {
    match expected["mode"].as_str() {
        Some("explain") => SourceMode::Explain,
        _ => SourceMode::Base,
    }
}

fn assert_order(batch: &DecisionBatch, expected: &Value) {
    let order: Vec<&str> = expected["order"]
        .as_array()
        .expect("order")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    let actual: Vec<&str> = batch.decisions.iter().map(|d| d.signal_id.as_str()).collect();
    assert_eq!(actual, order);
}

fn assert_label_map<F>(batch: &DecisionBatch, expected: &Value, key: &str, actual: F)
where
    F: Fn(&mercy_core::models::NormalizedDecision) -> Option<&'static str>,
{
    let Some(map) = expected[key].as_object() else {
        return;
    };
    for (id, want) in map {
        let decision = batch
            .decisions
            .iter()
            .find(|d| &d.signal_id == id)
            .unwrap_or_else(|| panic!("{id} missing from batch"));
        assert_eq!(actual(decision), want.as_str(), "{key} for {id}");
    }
}

#[test]
fn explain_batch_matches_golden() {
    let (batch, expected) = run("decisions/explain_batch.json");
    assert_eq!(batch.mode, expected_mode(&expected));
    assert_order(&batch, &expected);
    assert_label_map(&batch, &expected, "severity_labels", |d| Some(d.severity_label.as_str()));
    assert_label_map(&batch, &expected, "trend_labels", |d| d.trend_label.map(|t| t.as_str()));
    assert_label_map(&batch, &expected, "confidence_labels", |d| {
        d.confidence_label.map(|c| c.as_str())
    });
}

#[test]
fn explain_batch_details() {
    let (batch, _) = run("decisions/explain_batch.json");
    let find = |id: &str| batch.decisions.iter().find(|d| d.signal_id == id).unwrap();

    let incident = find("sig-incident");
    assert_eq!(incident.prod_issues_24h, 4);
    assert_eq!(incident.minutes_since_last_prod_issue, Some(12.5));
    assert_eq!(incident.suggested_action_text.as_deref(), Some("Page on-call."));

    let legacy = find("sig-investigate-b");
    assert_eq!(legacy.status_reason_code.as_deref(), Some("LEGACY_REASON"));
    assert_eq!(legacy.last_prod_issue_at, None);

    let quiet = find("sig-ok-quiet");
    assert_eq!(quiet.suggested_action_text, None);
}

#[test]
fn base_batch_matches_golden() {
    let (batch, expected) = run("decisions/base_batch.json");
    assert_eq!(batch.mode, expected_mode(&expected));
    assert!(!batch.explain_fields_meaningful());
    assert_order(&batch, &expected);
    assert_label_map(&batch, &expected, "severity_labels", |d| Some(d.severity_label.as_str()));
    assert!(batch.decisions.iter().all(|d| d.trend_label.is_none()));
}

#[test]
fn malformed_rows_all_normalize() {
    let rows = test_fixtures::load_rows("decisions/malformed_rows.json");
    let batch = DecisionEngine::default().normalize(&rows, None);
    assert_eq!(batch.len(), rows.len());

    let find = |id: &str| batch.decisions.iter().find(|d| d.signal_id == id).unwrap();
    let neg = find("neg");
    assert_eq!((neg.prod_issues_24h, neg.prod_issues_7d, neg.severity_score_7d), (0, 0, 0));

    let floaty = find("floaty");
    assert_eq!(floaty.prod_issues_24h, 2);
    assert_eq!(floaty.severity_score_7d, 199);

    // A numeric id is not a string id, and status matching is exact.
    assert_eq!(batch.synthesized_count(), 7);
    assert!(batch
        .decisions
        .iter()
        .all(|d| d.production_status == mercy_core::models::ProductionStatus::Ok));

    let nested = find("nested");
    assert_eq!(nested.suggested_action_text, None);
    assert_eq!(nested.suggested_action_code, None);
}

#[test]
fn fixture_set_is_complete() {
    let fixtures = test_fixtures::list_fixtures("decisions");
    assert!(fixtures.len() >= 3);
    assert!(test_fixtures::fixture_exists("decisions/explain_batch.json"));
}

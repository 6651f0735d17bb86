use mercy_core::models::{ProductionStatus, SeverityLabel};
use mercy_decisions::ranking::{is_ranked, rank};
use mercy_decisions::{coerce, DecisionEngine};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_status() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("incident"),
        Just("investigate"),
        Just("watch"),
        Just("ok"),
        Just("bogus"),
    ]
}

prop_compose! {
    fn arb_row()(
        id in prop::option::of("[a-d ]{0,3}"),
        status in arb_status(),
        score in -5i64..300,
        c24 in 0u64..5,
        c7 in 0u64..20,
        minutes in prop::option::of(0.0f64..10_000.0),
    ) -> Value {
        json!({
            "signal_id": id,
            "production_status": status,
            "severity_score_7d": score,
            "prod_issues_24h": c24,
            "prod_issues_7d": c7,
            "minutes_since_last_prod_issue": minutes,
        })
    }
}

// ── Coercion is total ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn coercion_never_panics_and_upholds_invariants(raw in arb_json()) {
        let d = coerce(&raw);
        prop_assert!(!d.signal_id.is_empty());
        if let Some(m) = d.minutes_since_last_prod_issue {
            prop_assert!(m.is_finite());
        }
        prop_assert_ne!(d.suggested_action_text.as_deref(), Some(""));
    }

    #[test]
    fn synthesized_ids_are_deterministic(raw in arb_json()) {
        prop_assert_eq!(coerce(&raw).signal_id, coerce(&raw).signal_id);
    }

    #[test]
    fn positive_score_never_labels_none(score in 1u64..1_000_000) {
        let d = coerce(&json!({"signal_id": "s", "severity_score_7d": score}));
        prop_assert_ne!(d.severity_label, SeverityLabel::None);
    }
}

// ── Ranking is a total, input-order-independent order ────────────────────

proptest! {
    #[test]
    fn rank_ignores_input_order(rows in prop::collection::vec(arb_row(), 0..30)) {
        let decisions: Vec<_> = rows.iter().map(coerce).collect();
        let mut reversed = decisions.clone();
        reversed.reverse();
        prop_assert_eq!(rank(&decisions), rank(&reversed));
    }

    #[test]
    fn rank_is_idempotent(rows in prop::collection::vec(arb_row(), 0..30)) {
        let once = rank(&rows.iter().map(coerce).collect::<Vec<_>>());
        prop_assert!(is_ranked(&once));
        prop_assert_eq!(rank(&once), once);
    }

    #[test]
    fn urgency_dominates(rows in prop::collection::vec(arb_row(), 1..30)) {
        let batch = DecisionEngine::default().normalize(&rows, None);
        let urgencies: Vec<u8> = batch
            .decisions
            .iter()
            .map(|d| d.production_status.urgency())
            .collect();
        prop_assert!(urgencies.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn unknown_recency_sorts_after_known(
        minutes in 0.0f64..10_000.0,
        id_known in "[a-z]{1,4}",
        id_unknown in "[a-z]{1,4}",
    ) {
        let known = coerce(&json!({"signal_id": id_known, "minutes_since_last_prod_issue": minutes}));
        let unknown = coerce(&json!({"signal_id": id_unknown}));
        let ranked = rank(&[unknown, known.clone()]);
        prop_assert_eq!(&ranked[0], &known);
        prop_assert_eq!(ranked[1].production_status, ProductionStatus::Ok);
    }
}

//! Loading from row sources.
//!
//! Explain view first, base view second. Loaders never fail: source
//! errors become an `AccessHint` and an empty batch. The demo fallback is
//! applied here, never inside the engine.

pub mod demo;
pub mod static_source;

use std::fmt;

use chrono::Utc;
use mercy_core::models::{EvidenceEntry, NormalizedDecision, SourceMode};
use mercy_core::traits::{DecisionView, IDecisionSource, IEvidenceSource, RowFilter, EVIDENCE_VIEW};
use tracing::{debug, warn};

use crate::engine::{DecisionBatch, DecisionEngine};
use crate::evidence::build_timeline;

pub use static_source::StaticSource;

/// What the caller could see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessHint {
    /// Rows were returned.
    Ok,
    /// A view answered but had no rows.
    NoRows,
    /// Every view failed; carries the first failure's reason.
    BlockedOrMissing(String),
}

impl AccessHint {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for AccessHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::NoRows => f.write_str("no_rows"),
            Self::BlockedOrMissing(reason) => write!(f, "blocked_or_missing:{reason}"),
        }
    }
}

/// Result of loading a decision batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub batch: DecisionBatch,
    /// The view the batch was read from.
    pub view: DecisionView,
    pub access: AccessHint,
}

/// Load and rank decisions, preferring the explain view.
///
/// The explain view is used when it returns rows. Otherwise the base view
/// is tried; its rows (possibly none) are normalized in base mode.
pub fn load_decisions(
    source: &dyn IDecisionSource,
    engine: &DecisionEngine,
    filter: &RowFilter,
) -> LoadOutcome {
    let explain = source.fetch(DecisionView::Explain, filter);
    let explain_err = match explain {
        Ok(rows) if !rows.is_empty() => {
            return LoadOutcome {
                batch: engine.normalize(&rows, Some(SourceMode::Explain)),
                view: DecisionView::Explain,
                access: AccessHint::Ok,
            };
        }
        Ok(_) => {
            debug!(view = DecisionView::Explain.name(), "no rows, trying base view");
            None
        }
        Err(e) => {
            warn!(
                view = DecisionView::Explain.name(),
                error = %e,
                "explain view failed, falling back to base view"
            );
            Some(e)
        }
    };

    let (rows, access) = match source.fetch(DecisionView::Base, filter) {
        Ok(rows) if !rows.is_empty() => (rows, AccessHint::Ok),
        Ok(rows) => (rows, AccessHint::NoRows),
        Err(base_err) => {
            warn!(view = DecisionView::Base.name(), error = %base_err, "base view failed");
            let access = match explain_err {
                // The explain view answered, it just had nothing.
                None => AccessHint::NoRows,
                Some(e) => AccessHint::BlockedOrMissing(e.hint()),
            };
            (Vec::new(), access)
        }
    };

    LoadOutcome {
        batch: engine.normalize(&rows, Some(SourceMode::Base)),
        view: DecisionView::Base,
        access,
    }
}

/// Everything a drill-down view needs for one signal.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionDetail {
    pub signal_id: String,
    pub decision: Option<NormalizedDecision>,
    pub mode: SourceMode,
    pub view: DecisionView,
    pub access: AccessHint,
    pub evidence: Vec<EvidenceEntry>,
    pub evidence_access: AccessHint,
    /// Content came from the demo fallback, not a source.
    pub demo: bool,
}

impl DecisionDetail {
    pub fn explain_fields_meaningful(&self) -> bool {
        self.mode.is_explain()
    }
}

/// Load one decision plus its evidence timeline.
///
/// With `fallback.demo_on_empty` set and no accessible decision, the
/// detail is filled from the demo rows, pushed through the same engine.
pub fn load_detail(
    decisions: &dyn IDecisionSource,
    evidence: &dyn IEvidenceSource,
    engine: &DecisionEngine,
    signal_id: &str,
) -> DecisionDetail {
    let signal_id = signal_id.trim();
    let limit = engine.config().evidence.limit;

    let mut detail = if signal_id.is_empty() {
        DecisionDetail {
            signal_id: String::new(),
            decision: None,
            mode: SourceMode::Base,
            view: DecisionView::Base,
            access: AccessHint::NoRows,
            evidence: Vec::new(),
            evidence_access: AccessHint::NoRows,
            demo: false,
        }
    } else {
        let outcome = load_decisions(decisions, engine, &RowFilter::signal(signal_id));
        let (timeline, evidence_access) = match evidence.fetch_evidence(signal_id, limit) {
            Ok(rows) => (build_timeline(&rows, limit), AccessHint::Ok),
            Err(e) => {
                warn!(view = EVIDENCE_VIEW, signal_id, error = %e, "evidence unavailable");
                (Vec::new(), AccessHint::BlockedOrMissing(e.hint()))
            }
        };
        DecisionDetail {
            signal_id: signal_id.to_string(),
            decision: outcome.batch.decisions.into_iter().next(),
            mode: outcome.batch.mode,
            view: outcome.view,
            access: outcome.access,
            evidence: timeline,
            evidence_access,
            demo: false,
        }
    };

    if detail.decision.is_none() && engine.config().fallback.demo_on_empty {
        debug!(signal_id, access = %detail.access, "no accessible decision, using demo rows");
        let demo_id = if signal_id.is_empty() { demo::DEMO_SIGNAL_ID } else { signal_id };
        let batch = engine.normalize(&[demo::demo_decision_row(demo_id)], Some(SourceMode::Explain));
        detail.signal_id = demo_id.to_string();
        detail.decision = batch.decisions.into_iter().next();
        detail.mode = SourceMode::Explain;
        if detail.evidence.is_empty() {
            detail.evidence = build_timeline(&demo::demo_evidence_rows(demo_id, Utc::now()), limit);
        }
        detail.demo = true;
    }

    detail
}

//! In-memory row source over already-materialized rows.

use mercy_core::errors::SourceError;
use mercy_core::traits::{DecisionView, IDecisionSource, IEvidenceSource, RowFilter};
use serde_json::Value;

/// Serves fixed rows per view. Either view, and evidence, can be made to
/// fail so callers can exercise the fallback path.
#[derive(Debug, Clone)]
pub struct StaticSource {
    explain: Result<Vec<Value>, SourceError>,
    base: Result<Vec<Value>, SourceError>,
    evidence: Result<Vec<Value>, SourceError>,
}

impl StaticSource {
    /// Both views present and empty; no evidence.
    pub fn new() -> Self {
        Self {
            explain: Ok(Vec::new()),
            base: Ok(Vec::new()),
            evidence: Ok(Vec::new()),
        }
    }

    /// A deployment without the explain view.
    pub fn base_only(rows: Vec<Value>) -> Self {
        Self::new()
            .with_base_rows(rows)
            .failing(DecisionView::Explain, missing_view(DecisionView::Explain))
    }

    pub fn with_explain_rows(mut self, rows: Vec<Value>) -> Self {
        self.explain = Ok(rows);
        self
    }

    pub fn with_base_rows(mut self, rows: Vec<Value>) -> Self {
        self.base = Ok(rows);
        self
    }

    pub fn with_evidence_rows(mut self, rows: Vec<Value>) -> Self {
        self.evidence = Ok(rows);
        self
    }

    /// Make every fetch against `view` fail with `error`.
    pub fn failing(mut self, view: DecisionView, error: SourceError) -> Self {
        match view {
            DecisionView::Explain => self.explain = Err(error),
            DecisionView::Base => self.base = Err(error),
        }
        self
    }

    pub fn failing_evidence(mut self, error: SourceError) -> Self {
        self.evidence = Err(error);
        self
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IDecisionSource for StaticSource {
    fn fetch(&self, view: DecisionView, filter: &RowFilter) -> Result<Vec<Value>, SourceError> {
        let rows = match view {
            DecisionView::Explain => self.explain.as_ref(),
            DecisionView::Base => self.base.as_ref(),
        }
        .map_err(Clone::clone)?;

        let limit = filter.limit.unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .filter(|row| match &filter.signal_id {
                Some(id) => signal_id_of(row) == Some(id.trim()),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

impl IEvidenceSource for StaticSource {
    fn fetch_evidence(&self, signal_id: &str, limit: usize) -> Result<Vec<Value>, SourceError> {
        let rows = self.evidence.as_ref().map_err(Clone::clone)?;
        Ok(rows
            .iter()
            .filter(|row| signal_id_of(row) == Some(signal_id.trim()))
            .take(limit)
            .cloned()
            .collect())
    }
}

fn signal_id_of(row: &Value) -> Option<&str> {
    row.get("signal_id").and_then(Value::as_str).map(str::trim)
}

fn missing_view(view: DecisionView) -> SourceError {
    SourceError::Unavailable {
        view: view.name().to_string(),
        reason: format!("relation \"{}\" does not exist", view.name()),
    }
}

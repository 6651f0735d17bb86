use serde_json::Value;

use crate::errors::SourceError;

/// The two decision views a source can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionView {
    /// Base columns plus trend, confidence, severity label, and reason code.
    Explain,
    /// Base columns only.
    Base,
}

impl DecisionView {
    pub fn name(self) -> &'static str {
        match self {
            Self::Explain => "v_production_decisions_explain",
            Self::Base => "v_production_decisions",
        }
    }
}

/// Row selection pushed down to the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Restrict to a single signal. Sources return at most one row per key.
    pub signal_id: Option<String>,
    pub limit: Option<usize>,
}

impl RowFilter {
    /// Every row the caller may see.
    pub fn all() -> Self {
        Self::default()
    }

    /// The single row for `signal_id`.
    pub fn signal(signal_id: impl Into<String>) -> Self {
        Self {
            signal_id: Some(signal_id.into()),
            limit: Some(1),
        }
    }
}

/// Supplies raw decision rows for a view.
pub trait IDecisionSource {
    fn fetch(&self, view: DecisionView, filter: &RowFilter) -> Result<Vec<Value>, SourceError>;
}

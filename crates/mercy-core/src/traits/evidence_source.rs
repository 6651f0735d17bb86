use serde_json::Value;

use crate::errors::SourceError;

/// Name of the enriched signal-entry view evidence is read from.
pub const EVIDENCE_VIEW: &str = "v_signal_entries_enriched";

/// Supplies raw evidence rows for one signal, newest first when the
/// source can order them. The timeline builder re-sorts regardless.
pub trait IEvidenceSource {
    fn fetch_evidence(&self, signal_id: &str, limit: usize) -> Result<Vec<Value>, SourceError>;
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence timeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Maximum entries kept on a timeline, newest first.
    pub limit: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_EVIDENCE_LIMIT,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Explain-mode resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Inspect the first row for explain-only keys when the caller passes
    /// no explicit mode. When false such batches are treated as base mode.
    pub detect_explain: bool,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            detect_explain: defaults::DEFAULT_DETECT_EXPLAIN,
        }
    }
}

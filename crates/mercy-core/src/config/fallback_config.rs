use serde::{Deserialize, Serialize};

use super::defaults;

/// Row-source fallback policy for drill-down views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Substitute demo rows when no decision is accessible for a signal.
    pub demo_on_empty: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            demo_on_empty: defaults::DEFAULT_DEMO_ON_EMPTY,
        }
    }
}

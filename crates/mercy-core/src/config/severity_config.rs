use serde::{Deserialize, Serialize};

use super::defaults;

/// Score thresholds for severity banding, evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    /// Scores at or above this are `High`.
    pub high: u64,
    /// Scores at or above this are `Medium`.
    pub medium: u64,
    /// Scores at or above this are `Low`; anything below is `None`.
    pub low: u64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            high: defaults::DEFAULT_SEVERITY_HIGH,
            medium: defaults::DEFAULT_SEVERITY_MEDIUM,
            low: defaults::DEFAULT_SEVERITY_LOW,
        }
    }
}

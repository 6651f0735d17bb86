use serde::{Deserialize, Serialize};

/// Which shape of decision rows a batch was read from.
///
/// Resolved once per batch. In `Base` mode the trend and confidence
/// fields are always null and should be hidden, not rendered as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    Base,
    Explain,
}

impl SourceMode {
    pub fn is_explain(self) -> bool {
        matches!(self, Self::Explain)
    }
}

//! Row source errors.
//!
//! Raised by `IDecisionSource`/`IEvidenceSource` implementations. The
//! loaders turn these into an access hint instead of propagating them.

use super::error_code::{self, MercyErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("{view} is unavailable: {reason}")]
    Unavailable { view: String, reason: String },

    #[error("access to {view} denied")]
    AccessDenied { view: String },

    #[error("query against {view} failed: {message}")]
    Query { view: String, message: String },
}

impl SourceError {
    /// Short reason carried into `AccessHint::BlockedOrMissing`.
    pub fn hint(&self) -> String {
        match self {
            Self::Unavailable { reason, .. } => reason.clone(),
            Self::AccessDenied { .. } => "access_denied".to_string(),
            Self::Query { message, .. } => message.clone(),
        }
    }
}

impl MercyErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::SOURCE_UNAVAILABLE,
            Self::AccessDenied { .. } => error_code::SOURCE_ACCESS_DENIED,
            Self::Query { .. } => error_code::SOURCE_QUERY_FAILED,
        }
    }
}

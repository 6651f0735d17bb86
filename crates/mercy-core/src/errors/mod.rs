//! Error handling for Mercy.
//! One error enum per concern, `thiserror` only. The normalization engine
//! itself has no error type; these cover config loading and row sources.

pub mod config_error;
pub mod error_code;
pub mod source_error;

pub use config_error::ConfigError;
pub use error_code::MercyErrorCode;
pub use source_error::SourceError;

/// Top-level error aggregating the subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MercyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Row source error: {0}")]
    Source(#[from] SourceError),
}

impl MercyErrorCode for MercyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
        }
    }
}

pub type MercyResult<T> = Result<T, MercyError>;

//! MercyErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers at the presentation
/// boundary can branch on a code instead of a message.
pub trait MercyErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_UNAVAILABLE: &str = "SOURCE_UNAVAILABLE";
pub const SOURCE_ACCESS_DENIED: &str = "SOURCE_ACCESS_DENIED";
pub const SOURCE_QUERY_FAILED: &str = "SOURCE_QUERY_FAILED";

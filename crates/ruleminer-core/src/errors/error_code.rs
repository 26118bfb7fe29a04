//! Stable error codes shared by every error enum.

/// Maps an error to a stable, machine-readable code.
pub trait RuleMinerErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const DATA_INTEGRITY: &str = "DATA_INTEGRITY";
pub const FEATURE_SCHEMA: &str = "FEATURE_SCHEMA";
pub const PRECONDITION: &str = "PRECONDITION";
pub const MINING_ERROR: &str = "MINING_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";

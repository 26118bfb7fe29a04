//! Feature extraction and feature-file errors.

use super::error_code::{self, RuleMinerErrorCode};
use super::ParseError;

/// Errors that can occur while building or loading feature vectors.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("Feature vector for {rule} has {actual} values, schema expects {expected}")]
    DimensionMismatch {
        rule: String,
        expected: usize,
        actual: usize,
    },

    #[error("Relation value for ({item}, {feature}) is not finite: {value}")]
    NonFiniteValue {
        item: String,
        feature: String,
        value: f64,
    },

    #[error("Feature file {path} is missing header line {line}")]
    MissingHeader { path: String, line: usize },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl RuleMinerErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } | Self::NonFiniteValue { .. } => {
                error_code::FEATURE_SCHEMA
            }
            Self::MissingHeader { .. } | Self::Parse(_) => error_code::PARSE_ERROR,
        }
    }
}

//! Pipeline errors.

use super::error_code::{self, RuleMinerErrorCode};
use super::{ConfigError, DictionaryError, FeatureError, MiningError, ParseError};

/// Errors that can occur while running pipeline operations.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    #[error("Stage {stage} cannot run: {message}")]
    Precondition {
        stage: &'static str,
        message: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Map an I/O failure on `path` raised by `stage`. A missing file means a
    /// prerequisite stage has not produced its output yet.
    pub fn io(stage: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Precondition {
                stage,
                message: format!("missing intermediate file {}", path.display()),
            }
        } else {
            Self::Io {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

impl RuleMinerErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Dictionary(e) => e.error_code(),
            Self::Feature(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
            Self::Precondition { .. } => error_code::PRECONDITION,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

/// Result alias used by the pipeline's public operations.
pub type RuleMinerResult<T> = Result<T, PipelineError>;

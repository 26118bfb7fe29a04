//! Errors raised by the itemset miner and the rule generator.

use super::error_code::{self, RuleMinerErrorCode};
use super::DictionaryError;

/// Errors that can occur while mining itemsets or generating rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid mining parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Failed to build a {threads}-thread pool: {message}")]
    ThreadPool { threads: usize, message: String },

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MiningError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl RuleMinerErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } | Self::ThreadPool { .. } => error_code::MINING_ERROR,
            Self::Dictionary(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

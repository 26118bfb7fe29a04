//! Itemset and rules dictionary errors.

use std::fmt;

use super::error_code::{self, RuleMinerErrorCode};
use super::ParseError;

/// Which itemset of a rule a frequency lookup was resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsetRole {
    Left,
    Right,
    Both,
}

impl fmt::Display for ItemsetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Both => f.write_str("left+right"),
        }
    }
}

/// Errors that can occur while loading or querying the dictionaries.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Intermediate file missing: {path} (was the producing stage run?)")]
    FileMissing { path: String },

    #[error("Itemset file {path} holds no transaction count")]
    EmptyIndex { path: String },

    #[error("Itemset {itemset} ({role} of rule {rule}) is not in the dictionary")]
    MissingItemset {
        rule: String,
        itemset: String,
        role: ItemsetRole,
    },

    #[error("Rule {rule} has zero left support")]
    ZeroLeftSupport { rule: String },

    #[error("Rule {rule} appears in shard {first_shard} and shard {second_shard}")]
    DuplicateRule {
        rule: String,
        first_shard: usize,
        second_shard: usize,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    /// Map an I/O failure on `path`, turning a missing file into the
    /// precondition fault raised when a stage runs out of order.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileMissing { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl RuleMinerErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileMissing { .. } | Self::EmptyIndex { .. } => error_code::PRECONDITION,
            Self::MissingItemset { .. }
            | Self::ZeroLeftSupport { .. }
            | Self::DuplicateRule { .. } => error_code::DATA_INTEGRITY,
            Self::Parse(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

//! Parse errors for items, rules, and the line-oriented intermediate files.

use super::error_code::{self, RuleMinerErrorCode};

/// Errors raised while parsing persisted text.
///
/// A parse fault aborts the whole batch that hit it; callers never skip a
/// malformed record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty item")]
    EmptyItem,

    #[error("Item {item:?} contains reserved character {character:?}")]
    ReservedCharacter { item: String, character: char },

    #[error("Item {item:?} has leading or trailing whitespace")]
    UntrimmedItem { item: String },

    #[error("Rule {text:?} has no side separator")]
    MissingSeparator { text: String },

    #[error("Rule {text:?} has an empty {side} side")]
    EmptySide { text: String, side: &'static str },

    #[error("Rule {text:?} has item {item:?} on both sides")]
    OverlappingSides { text: String, item: String },

    #[error("{path}:{line}: {message}")]
    InvalidLine {
        path: String,
        line: usize,
        message: String,
    },
}

impl RuleMinerErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}

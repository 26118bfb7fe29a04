//! Prefix-based filter bundle declarations.

use serde::{Deserialize, Serialize};

/// A filter bundle declared in config under `[filters.<name>]`.
///
/// An item is left-eligible when it starts with one of `left_prefixes`
/// and right-eligible when it starts with one of `right_prefixes`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PrefixFilterConfig {
    pub left_prefixes: Vec<String>,
    pub right_prefixes: Vec<String>,
}

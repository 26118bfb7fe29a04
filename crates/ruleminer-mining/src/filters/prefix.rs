//! Prefix-based filter bundle.

use ruleminer_core::config::PrefixFilterConfig;
use ruleminer_core::types::Item;

use super::RuleFilter;

/// Side eligibility by item prefix, e.g. `age=`/`sex=` on the left and
/// `class=` on the right.
#[derive(Debug, Clone)]
pub struct PrefixFilter {
    name: String,
    left_prefixes: Vec<String>,
    right_prefixes: Vec<String>,
}

impl PrefixFilter {
    pub fn new(
        name: impl Into<String>,
        left_prefixes: Vec<String>,
        right_prefixes: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            left_prefixes,
            right_prefixes,
        }
    }

    pub fn from_config(name: &str, config: &PrefixFilterConfig) -> Self {
        Self::new(
            name,
            config.left_prefixes.clone(),
            config.right_prefixes.clone(),
        )
    }
}

impl RuleFilter for PrefixFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn accepts_left_item(&self, item: &Item) -> bool {
        item.has_any_prefix(&self.left_prefixes)
    }

    fn accepts_right_item(&self, item: &Item) -> bool {
        item.has_any_prefix(&self.right_prefixes)
    }
}

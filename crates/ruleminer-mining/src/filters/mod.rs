//! Filter bundles: which itemsets feed rule generation, which rules are
//! kept, and which items are eligible for each side.

pub mod prefix;
pub mod registry;

use std::fmt;

use ruleminer_core::constants::DEFAULT_FILTER;
use ruleminer_core::types::{AssociationRule, Item, Itemset};

pub use prefix::PrefixFilter;
pub use registry::FilterRegistry;

/// A capability bundle of the four filters a run needs.
///
/// Implementors provide the two item predicates; the itemset and rule
/// predicates default to what those predicates imply.
pub trait RuleFilter: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// May `item` appear on the left side of a rule?
    fn accepts_left_item(&self, item: &Item) -> bool;

    /// May `item` appear on the right side of a rule?
    fn accepts_right_item(&self, item: &Item) -> bool;

    /// Can at least one accepted rule be built from `itemset`?
    ///
    /// True when every item is eligible for some side and both sides have
    /// at least one eligible item.
    fn accepts_itemset(&self, itemset: &Itemset) -> bool {
        let mut any_left = false;
        let mut any_right = false;
        for item in itemset {
            let left = self.accepts_left_item(item);
            let right = self.accepts_right_item(item);
            if !left && !right {
                return false;
            }
            any_left |= left;
            any_right |= right;
        }
        any_left && any_right
    }

    fn accepts_rule(&self, rule: &AssociationRule) -> bool {
        rule.left().iter().all(|i| self.accepts_left_item(i))
            && rule.right().iter().all(|i| self.accepts_right_item(i))
    }
}

/// The built-in `default` bundle: every item, itemset and rule passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl RuleFilter for AcceptAll {
    fn name(&self) -> &str {
        DEFAULT_FILTER
    }

    fn accepts_left_item(&self, _item: &Item) -> bool {
        true
    }

    fn accepts_right_item(&self, _item: &Item) -> bool {
        true
    }

    fn accepts_itemset(&self, _itemset: &Itemset) -> bool {
        true
    }

    fn accepts_rule(&self, _rule: &AssociationRule) -> bool {
        true
    }
}

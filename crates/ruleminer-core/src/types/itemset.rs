//! Itemset: a canonical (sorted, deduplicated) set of items.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::ITEM_SEPARATOR;
use crate::errors::ParseError;

use super::Item;

/// A set of items. Iteration order is the sorted item order, which also
/// fixes the serialized form (`a,b,c`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset {
    items: BTreeSet<Item>,
}

impl Itemset {
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Parse the comma-separated form. Every piece must be a valid item.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.split(ITEM_SEPARATOR)
            .map(Item::new)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|items| Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Self {
            items: self.items.union(&other.items).cloned().collect(),
        }
    }

    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Self {
            items: self.items.difference(&other.items).cloned().collect(),
        }
    }

    /// First item present in both sets, if any.
    pub fn first_shared<'a>(&'a self, other: &'a Itemset) -> Option<&'a Item> {
        self.items.intersection(&other.items).next()
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Canonical ordering used for persisted itemsets: size first, then lexical.
    pub fn canonical_cmp(&self, other: &Itemset) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| self.cmp(other))
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, "{ITEM_SEPARATOR}")?;
            }
            f.write_str(item.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Itemset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

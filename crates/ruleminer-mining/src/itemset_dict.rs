//! Itemset dictionary: support counts of every retained itemset.
//!
//! File format (owned together with the miner):
//!
//! ```text
//! <transaction count>
//! <support>\t<item>,<item>,...
//! ```
//!
//! Itemset lines are written in canonical order (size, then lexical).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use ruleminer_core::constants::SUPPORT_SEPARATOR;
use ruleminer_core::errors::{DictionaryError, ItemsetRole, ParseError};
use ruleminer_core::types::{AssociationRule, FrequencyCombo, Itemset};

/// In-memory index over one itemset file.
#[derive(Debug, Clone, Default)]
pub struct ItemsetDictionary {
    transactions: u64,
    supports: FxHashMap<Itemset, u64>,
}

impl ItemsetDictionary {
    pub fn new(transactions: u64) -> Self {
        Self {
            transactions,
            supports: FxHashMap::default(),
        }
    }

    /// Record the support of `itemset`, replacing any earlier value.
    pub fn insert(&mut self, itemset: Itemset, support: u64) {
        self.supports.insert(itemset, support);
    }

    /// Total transaction count of the mined dataset.
    pub fn transaction_count(&self) -> u64 {
        self.transactions
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn support(&self, itemset: &Itemset) -> Option<u64> {
        self.supports.get(itemset).copied()
    }

    /// Resolve `(left, right, left ∪ right)` supports for `rule`.
    ///
    /// An itemset missing from the dictionary was pruned by mining; that is a
    /// data-integrity fault, never a zero support.
    pub fn frequency_combo(&self, rule: &AssociationRule) -> Result<FrequencyCombo, DictionaryError> {
        let left = self.lookup(rule, rule.left(), ItemsetRole::Left)?;
        let right = self.lookup(rule, rule.right(), ItemsetRole::Right)?;
        let both = self.lookup(rule, &rule.union(), ItemsetRole::Both)?;
        Ok(FrequencyCombo::new(left, right, both))
    }

    fn lookup(
        &self,
        rule: &AssociationRule,
        itemset: &Itemset,
        role: ItemsetRole,
    ) -> Result<u64, DictionaryError> {
        self.support(itemset)
            .ok_or_else(|| DictionaryError::MissingItemset {
                rule: rule.serialize(),
                itemset: itemset.serialize(),
                role,
            })
    }

    /// Every itemset with its support, in canonical order.
    pub fn itemsets(&self) -> Vec<(&Itemset, u64)> {
        let mut entries: Vec<(&Itemset, u64)> =
            self.supports.iter().map(|(k, &v)| (k, v)).collect();
        entries.sort_by(|a, b| a.0.canonical_cmp(b.0));
        entries
    }

    /// Load a dictionary from an itemset file.
    pub fn load_from_file(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path).map_err(|e| DictionaryError::from_io(path, e))?;
        let mut lines = BufReader::new(file).lines();

        let header = match lines.next() {
            Some(line) => line.map_err(|e| DictionaryError::from_io(path, e))?,
            None => {
                return Err(DictionaryError::EmptyIndex {
                    path: path.display().to_string(),
                })
            }
        };
        let transactions = header
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid_line(path, 1, format!("bad transaction count: {e}")))?;

        let mut dict = Self::new(transactions);
        for (idx, line) in lines.enumerate() {
            let line_no = idx + 2;
            let line = line.map_err(|e| DictionaryError::from_io(path, e))?;
            let (support, items) = line
                .split_once(SUPPORT_SEPARATOR)
                .ok_or_else(|| invalid_line(path, line_no, "missing support separator"))?;
            let support = support
                .parse::<u64>()
                .map_err(|e| invalid_line(path, line_no, format!("bad support: {e}")))?;
            let itemset = Itemset::parse(items.trim_end())
                .map_err(|e| invalid_line(path, line_no, e.to_string()))?;
            if dict.supports.insert(itemset, support).is_some() {
                return Err(invalid_line(path, line_no, "duplicate itemset"));
            }
        }

        debug!(
            path = %path.display(),
            transactions,
            itemsets = dict.len(),
            "loaded itemset dictionary"
        );
        Ok(dict)
    }

    /// Write the dictionary in the itemset file format.
    pub fn save(&self, path: &Path) -> Result<(), DictionaryError> {
        let io_err = |e| DictionaryError::Io {
            path: path.display().to_string(),
            source: e,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", self.transactions).map_err(io_err)?;
        for (itemset, support) in self.itemsets() {
            writeln!(writer, "{support}{SUPPORT_SEPARATOR}{itemset}").map_err(io_err)?;
        }
        writer.flush().map_err(io_err)
    }
}

fn invalid_line(path: &Path, line: usize, message: impl Into<String>) -> DictionaryError {
    DictionaryError::Parse(ParseError::InvalidLine {
        path: path.display().to_string(),
        line,
        message: message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> Itemset {
        Itemset::parse(text).unwrap()
    }

    fn sample() -> ItemsetDictionary {
        let mut dict = ItemsetDictionary::new(100);
        dict.insert(set("a"), 50);
        dict.insert(set("b"), 20);
        dict.insert(set("a,b"), 10);
        dict
    }

    #[test]
    fn combo_resolves_all_three_supports() {
        let rule = AssociationRule::parse("a>b").unwrap();
        let combo = sample().frequency_combo(&rule).unwrap();
        assert_eq!(combo, FrequencyCombo::new(50, 20, 10));
    }

    #[test]
    fn missing_union_is_a_data_integrity_fault() {
        let mut dict = ItemsetDictionary::new(100);
        dict.insert(set("a"), 50);
        dict.insert(set("b"), 20);
        let rule = AssociationRule::parse("a>b").unwrap();
        match dict.frequency_combo(&rule) {
            Err(DictionaryError::MissingItemset { role, itemset, .. }) => {
                assert_eq!(role, ItemsetRole::Both);
                assert_eq!(itemset, "a,b");
            }
            other => panic!("expected MissingItemset, got {other:?}"),
        }
    }

    #[test]
    fn missing_left_reported_first() {
        let dict = ItemsetDictionary::new(10);
        let rule = AssociationRule::parse("a>b").unwrap();
        assert!(matches!(
            dict.frequency_combo(&rule),
            Err(DictionaryError::MissingItemset {
                role: ItemsetRole::Left,
                ..
            })
        ));
    }

    #[test]
    fn itemsets_are_canonically_ordered() {
        let dict = sample();
        let order: Vec<String> = dict.itemsets().iter().map(|(s, _)| s.serialize()).collect();
        assert_eq!(order, vec!["a", "b", "a,b"]);
    }
}

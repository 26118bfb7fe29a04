//! In-memory transaction dataset.

use std::collections::BTreeSet;

use ruleminer_core::errors::ParseError;
use ruleminer_core::types::{Item, Itemset};

/// A list of transactions, each a set of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDataset {
    transactions: Vec<Itemset>,
}

impl TransactionDataset {
    pub fn new(transactions: Vec<Itemset>) -> Self {
        Self { transactions }
    }

    /// Build from raw item text, validating every item.
    pub fn from_rows<R, S>(rows: R) -> Result<Self, ParseError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transactions = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(Item::new)
                    .collect::<Result<Itemset, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { transactions })
    }

    /// Number of transactions.
    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Itemset] {
        &self.transactions
    }

    /// Every distinct item, sorted.
    pub fn items(&self) -> BTreeSet<Item> {
        self.transactions
            .iter()
            .flat_map(|t| t.iter().cloned())
            .collect()
    }
}

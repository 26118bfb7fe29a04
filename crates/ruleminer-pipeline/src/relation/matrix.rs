//! Relation matrix trait and its dense in-memory implementation.

use std::fmt;

use rustc_hash::FxHashMap;

use ruleminer_core::errors::FeatureError;
use ruleminer_core::types::Item;

/// Per-item numeric scores against named features.
pub trait RelationMatrix: Send + Sync + fmt::Debug {
    /// The item universe, in any order.
    fn items(&self) -> Vec<Item>;

    /// Score of `item` against `feature`. Unknown pairs score 0.0.
    ///
    /// Must be finite; feature extraction rejects anything else.
    fn value(&self, item: &Item, feature: &Item) -> f64;
}

/// Explicit `(item, feature)` values.
///
/// Every item that holds a row or is set as a feature belongs to the
/// universe. Only finite values are accepted.
#[derive(Debug, Clone, Default)]
pub struct DenseRelationMatrix {
    rows: FxHashMap<Item, FxHashMap<Item, f64>>,
}

impl DenseRelationMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the universe without any score.
    pub fn add_item(&mut self, item: Item) {
        self.rows.entry(item).or_default();
    }

    pub fn set(&mut self, item: Item, feature: Item, value: f64) -> Result<(), FeatureError> {
        if !value.is_finite() {
            return Err(FeatureError::NonFiniteValue {
                item: item.to_string(),
                feature: feature.to_string(),
                value,
            });
        }
        self.insert_finite(item, feature, value);
        Ok(())
    }

    /// Store a value already known to be finite.
    pub(crate) fn insert_finite(&mut self, item: Item, feature: Item, value: f64) {
        self.rows.entry(feature.clone()).or_default();
        self.rows.entry(item).or_default().insert(feature, value);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RelationMatrix for DenseRelationMatrix {
    fn items(&self) -> Vec<Item> {
        self.rows.keys().cloned().collect()
    }

    fn value(&self, item: &Item, feature: &Item) -> f64 {
        self.rows
            .get(item)
            .and_then(|row| row.get(feature))
            .copied()
            .unwrap_or(0.0)
    }
}

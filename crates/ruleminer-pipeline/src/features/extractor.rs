//! Feature extraction from a relation matrix.

use ruleminer_core::errors::FeatureError;
use ruleminer_core::types::{Item, Itemset};
use ruleminer_mining::RuleFilter;

use crate::relation::RelationMatrix;

/// Split the matrix's item universe into sorted left and right feature names.
/// An item eligible for both sides appears in both lists.
pub fn feature_names(matrix: &dyn RelationMatrix, filter: &dyn RuleFilter) -> (Vec<Item>, Vec<Item>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for item in matrix.items() {
        if filter.accepts_left_item(&item) {
            left.push(item.clone());
        }
        if filter.accepts_right_item(&item) {
            right.push(item);
        }
    }
    left.sort();
    left.dedup();
    right.sort();
    right.dedup();
    (left, right)
}

/// One value per feature name: the largest-magnitude value over the
/// itemset's items, sign kept. Starts from 0.0; equal magnitudes of opposite
/// sign resolve to the positive one, so item order never matters.
///
/// A non-finite matrix value is a [`FeatureError::NonFiniteValue`]: it has no
/// magnitude to compare and cannot be stored in the feature file.
pub fn extract_for_itemset(
    matrix: &dyn RelationMatrix,
    itemset: &Itemset,
    names: &[Item],
) -> Result<Vec<f64>, FeatureError> {
    names
        .iter()
        .map(|feature| {
            itemset.iter().try_fold(0.0, |current, item| {
                let value = matrix.value(item, feature);
                if !value.is_finite() {
                    return Err(FeatureError::NonFiniteValue {
                        item: item.to_string(),
                        feature: feature.to_string(),
                        value,
                    });
                }
                Ok(dominant(current, value))
            })
        })
        .collect()
}

fn dominant(current: f64, candidate: f64) -> f64 {
    let (c, n) = (current.abs(), candidate.abs());
    if n > c || (n == c && candidate > current) {
        candidate
    } else {
        current
    }
}

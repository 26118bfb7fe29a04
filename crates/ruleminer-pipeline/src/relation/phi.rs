//! Relation matrix derived from item co-occurrence in a dataset.

use rustc_hash::FxHashMap;
use tracing::debug;

use ruleminer_core::types::Item;
use ruleminer_mining::TransactionDataset;

use super::DenseRelationMatrix;

/// Item × item phi coefficient over the transactions of `dataset`.
///
/// Pairs involving an item present in every transaction (or in none) have no
/// defined correlation and score 0.0, as do pairs that never co-occur and
/// are exactly independent.
pub fn phi_relation_matrix(dataset: &TransactionDataset) -> DenseRelationMatrix {
    let universe: Vec<Item> = dataset.items().into_iter().collect();
    let n = dataset.size() as f64;

    let mut counts = vec![0u64; universe.len()];
    let mut pairs: FxHashMap<(usize, usize), u64> = FxHashMap::default();
    for transaction in dataset.transactions() {
        let ids: Vec<usize> = transaction
            .iter()
            .filter_map(|item| universe.binary_search(item).ok())
            .collect();
        for (pos, &i) in ids.iter().enumerate() {
            counts[i] += 1;
            for &j in &ids[pos + 1..] {
                *pairs.entry((i, j)).or_insert(0) += 1;
            }
        }
    }

    let mut matrix = DenseRelationMatrix::new();
    for item in &universe {
        matrix.add_item(item.clone());
    }
    for i in 0..universe.len() {
        for j in 0..universe.len() {
            let both = if i == j {
                counts[i]
            } else {
                pairs.get(&(i.min(j), i.max(j))).copied().unwrap_or(0)
            };
            let phi = phi_coefficient(n, counts[i] as f64, counts[j] as f64, both as f64);
            if phi != 0.0 {
                matrix.insert_finite(universe[i].clone(), universe[j].clone(), phi);
            }
        }
    }

    debug!(
        items = universe.len(),
        transactions = dataset.size(),
        "derived phi relation matrix"
    );
    matrix
}

fn phi_coefficient(n: f64, a: f64, b: f64, ab: f64) -> f64 {
    let value = (n * ab - a * b) / (a * (n - a) * b * (n - b)).sqrt();
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::RelationMatrix;

    fn item(s: &str) -> Item {
        Item::new(s).unwrap()
    }

    #[test]
    fn perfectly_correlated_and_anti_correlated_items() {
        let dataset = TransactionDataset::from_rows(vec![
            vec!["a", "b"],
            vec!["a", "b"],
            vec!["c"],
            vec!["c"],
        ])
        .unwrap();
        let m = phi_relation_matrix(&dataset);
        assert!((m.value(&item("a"), &item("b")) - 1.0).abs() < 1e-12);
        assert!((m.value(&item("a"), &item("c")) + 1.0).abs() < 1e-12);
        assert!((m.value(&item("c"), &item("c")) - 1.0).abs() < 1e-12);
        assert_eq!(m.items().len(), 3);
    }

    #[test]
    fn item_in_every_transaction_scores_zero() {
        let dataset =
            TransactionDataset::from_rows(vec![vec!["a", "b"], vec!["a"], vec!["a", "c"]]).unwrap();
        let m = phi_relation_matrix(&dataset);
        assert_eq!(m.value(&item("a"), &item("b")), 0.0);
        assert_eq!(m.value(&item("a"), &item("a")), 0.0);
    }
}

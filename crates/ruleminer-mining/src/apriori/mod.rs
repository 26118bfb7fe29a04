//! Level-wise Apriori miner.
//!
//! Items are interned to `u32` ids in sorted order so every transaction and
//! candidate is a sorted id slice. Level 1 is counted with a parallel fold;
//! deeper levels join the previous frequent level, prune by downward closure,
//! and count each candidate in parallel.

mod candidates;
mod counting;

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use ruleminer_core::errors::MiningError;
use ruleminer_core::types::{Item, Itemset};

use crate::dataset::TransactionDataset;
use crate::itemset_dict::ItemsetDictionary;
use crate::pool::build_pool;
use crate::traits::{ItemsetMiner, MiningSummary};

use candidates::Candidate;

/// Default [`ItemsetMiner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AprioriMiner;

impl AprioriMiner {
    pub fn new() -> Self {
        Self
    }

    /// Mine into an in-memory dictionary without touching the filesystem.
    pub fn mine_dictionary(
        &self,
        dataset: &TransactionDataset,
        min_support_count: f64,
        threads: usize,
        max_itemset_size: usize,
    ) -> Result<(ItemsetDictionary, usize), MiningError> {
        if !min_support_count.is_finite() || min_support_count < 0.0 {
            return Err(MiningError::InvalidParameter {
                name: "min_support_count",
                message: format!("must be a finite, non-negative count, got {min_support_count}"),
            });
        }
        if max_itemset_size == 0 {
            return Err(MiningError::InvalidParameter {
                name: "max_itemset_size",
                message: "must be at least 1".to_string(),
            });
        }
        let pool = build_pool(threads)?;

        let universe: Vec<Item> = dataset.items().into_iter().collect();
        let transactions: Vec<Vec<u32>> = dataset
            .transactions()
            .iter()
            .map(|t| encode(t, &universe))
            .collect();

        let mut dict = ItemsetDictionary::new(dataset.size() as u64);
        let decode = |ids: &[u32]| -> Itemset {
            ids.iter().map(|&id| universe[id as usize].clone()).collect()
        };

        let singles = pool.install(|| counting::count_singletons(&transactions, universe.len()));
        let mut level: Vec<Candidate> = Vec::new();
        for (id, &support) in singles.iter().enumerate() {
            if is_frequent(support, min_support_count) {
                let candidate = Candidate::from_slice(&[id as u32]);
                dict.insert(decode(candidate.as_slice()), support);
                level.push(candidate);
            }
        }
        let mut max_level = usize::from(!level.is_empty());
        debug!(level = 1, frequent = level.len(), "apriori level done");

        for size in 2..=max_itemset_size {
            let pending = candidates::next_level(&level);
            if pending.is_empty() {
                break;
            }
            let supports = pool.install(|| counting::count_candidates(&pending, &transactions));

            level = pending
                .into_iter()
                .zip(supports)
                .filter(|&(_, support)| is_frequent(support, min_support_count))
                .map(|(candidate, support)| {
                    dict.insert(decode(candidate.as_slice()), support);
                    candidate
                })
                .collect();
            debug!(level = size, frequent = level.len(), "apriori level done");
            if level.is_empty() {
                break;
            }
            max_level = size;
        }

        Ok((dict, max_level))
    }
}

impl ItemsetMiner for AprioriMiner {
    fn mine(
        &self,
        dataset: &TransactionDataset,
        min_support_count: f64,
        threads: usize,
        max_itemset_size: usize,
        output: &Path,
    ) -> Result<MiningSummary, MiningError> {
        let start = Instant::now();
        let (dict, max_level) =
            self.mine_dictionary(dataset, min_support_count, threads, max_itemset_size)?;
        dict.save(output)?;

        let summary = MiningSummary {
            transactions: dict.transaction_count(),
            itemsets: dict.len(),
            max_level,
        };
        info!(
            transactions = summary.transactions,
            itemsets = summary.itemsets,
            max_level,
            threads,
            duration_ms = start.elapsed().as_millis() as u64,
            output = %output.display(),
            "apriori mining complete"
        );
        Ok(summary)
    }

    fn name(&self) -> &str {
        "apriori"
    }
}

/// An itemset is frequent when it occurs at all and meets the threshold.
fn is_frequent(support: u64, min_support_count: f64) -> bool {
    support > 0 && support as f64 >= min_support_count
}

/// Sorted ids of a transaction; `universe` is sorted and holds every item.
fn encode(transaction: &Itemset, universe: &[Item]) -> Vec<u32> {
    transaction
        .iter()
        .filter_map(|item| universe.binary_search(item).ok())
        .map(|id| id as u32)
        .collect()
}

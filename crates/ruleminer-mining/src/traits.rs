//! Seams for the two parallel stages.

use std::path::Path;

use ruleminer_core::errors::MiningError;
use ruleminer_core::files::ShardSet;

use crate::dataset::TransactionDataset;
use crate::filters::RuleFilter;
use crate::itemset_dict::ItemsetDictionary;

/// What a mining run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiningSummary {
    pub transactions: u64,
    pub itemsets: usize,
    /// Deepest itemset level that still held a frequent itemset.
    pub max_level: usize,
}

/// What a rule-generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Rule count per shard, in shard order.
    pub rules_per_shard: Vec<usize>,
}

impl GenerationSummary {
    pub fn total_rules(&self) -> usize {
        self.rules_per_shard.iter().sum()
    }
}

/// Produces the support-annotated itemset file.
pub trait ItemsetMiner: Send + Sync {
    /// Mine every itemset of up to `max_itemset_size` items whose support is at
    /// least `min_support_count`, and write them to `output`.
    fn mine(
        &self,
        dataset: &TransactionDataset,
        min_support_count: f64,
        threads: usize,
        max_itemset_size: usize,
        output: &Path,
    ) -> Result<MiningSummary, MiningError>;

    fn name(&self) -> &str;
}

/// Produces exactly `shards.len()` rule shard files.
pub trait RuleGenerator: Send + Sync {
    /// Generate every rule accepted by `filter` with confidence of at least
    /// `min_confidence`. Shard files are complete when this returns.
    fn generate(
        &self,
        itemsets: &ItemsetDictionary,
        min_confidence: f64,
        filter: &dyn RuleFilter,
        threads: usize,
        shards: &ShardSet,
    ) -> Result<GenerationSummary, MiningError>;

    fn name(&self) -> &str;
}

//! # ruleminer-mining
//!
//! Everything between a transaction dataset and the rule shards:
//! Apriori itemset mining, the itemset dictionary, filter bundles,
//! sharded rule generation, and the merged rules dictionary.
//!
//! The miner and generator sit behind the [`ItemsetMiner`] and
//! [`RuleGenerator`] traits so the pipeline can swap implementations.

pub mod apriori;
pub mod dataset;
pub mod filters;
pub mod generator;
pub mod itemset_dict;
mod pool;
pub mod rules_dict;
pub mod traits;

pub use apriori::AprioriMiner;
pub use dataset::TransactionDataset;
pub use filters::{AcceptAll, FilterRegistry, PrefixFilter, RuleFilter};
pub use generator::ShardedRuleGenerator;
pub use itemset_dict::ItemsetDictionary;
pub use rules_dict::RulesDictionary;
pub use traits::{GenerationSummary, ItemsetMiner, MiningSummary, RuleGenerator};

//! Sharded rule generation.
//!
//! Qualifying itemsets are dealt round-robin to one bucket per thread in
//! canonical order; each bucket becomes one shard file, written in parallel.
//! Within an itemset, candidate left sides are enumerated by bitmask.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use ruleminer_core::errors::{DictionaryError, ItemsetRole, MiningError};
use ruleminer_core::files::ShardSet;
use ruleminer_core::types::{AssociationRule, Item, Itemset};

use crate::filters::RuleFilter;
use crate::itemset_dict::ItemsetDictionary;
use crate::pool::build_pool;
use crate::traits::{GenerationSummary, RuleGenerator};

/// Largest itemset whose left sides fit in a `u64` mask.
const MAX_RULE_ITEMSET: usize = 63;

/// Default [`RuleGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShardedRuleGenerator;

impl ShardedRuleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Every rule derivable from `itemset` that passes `filter` and the
    /// confidence threshold, in left-mask order.
    pub fn rules_for_itemset(
        itemset: &Itemset,
        both: u64,
        itemsets: &ItemsetDictionary,
        min_confidence: f64,
        filter: &dyn RuleFilter,
    ) -> Result<Vec<AssociationRule>, MiningError> {
        let items: Vec<&Item> = itemset.iter().collect();
        let n = items.len();
        if n < 2 {
            return Ok(Vec::new());
        }
        if n > MAX_RULE_ITEMSET {
            return Err(MiningError::InvalidParameter {
                name: "itemset",
                message: format!("{itemset} has {n} items, at most {MAX_RULE_ITEMSET} supported"),
            });
        }

        let full: u64 = (1u64 << n) - 1;
        let mut rules = Vec::new();
        for mask in 1..full {
            let (left, right) = split(&items, mask);
            let rule = AssociationRule::new(left, right).map_err(DictionaryError::from)?;
            if !filter.accepts_rule(&rule) {
                continue;
            }
            let left_support =
                itemsets
                    .support(rule.left())
                    .ok_or_else(|| DictionaryError::MissingItemset {
                        rule: rule.serialize(),
                        itemset: rule.left().serialize(),
                        role: ItemsetRole::Left,
                    })?;
            if left_support == 0 {
                return Err(DictionaryError::ZeroLeftSupport {
                    rule: rule.serialize(),
                }
                .into());
            }
            if both as f64 / left_support as f64 >= min_confidence {
                rules.push(rule);
            }
        }
        Ok(rules)
    }
}

impl RuleGenerator for ShardedRuleGenerator {
    fn generate(
        &self,
        itemsets: &ItemsetDictionary,
        min_confidence: f64,
        filter: &dyn RuleFilter,
        threads: usize,
        shards: &ShardSet,
    ) -> Result<GenerationSummary, MiningError> {
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(MiningError::InvalidParameter {
                name: "min_confidence",
                message: format!("must be between 0.0 and 1.0, got {min_confidence}"),
            });
        }
        if shards.len() != threads {
            return Err(MiningError::InvalidParameter {
                name: "shards",
                message: format!("{} shard paths for {threads} threads", shards.len()),
            });
        }
        let pool = build_pool(threads)?;
        let start = Instant::now();

        let mut buckets: Vec<Vec<(&Itemset, u64)>> = vec![Vec::new(); threads];
        let qualifying = itemsets
            .itemsets()
            .into_iter()
            .filter(|(itemset, _)| itemset.len() >= 2 && filter.accepts_itemset(itemset));
        for (i, entry) in qualifying.enumerate() {
            buckets[i % threads].push(entry);
        }

        let jobs: Vec<(usize, &Path, Vec<(&Itemset, u64)>)> = shards
            .iter()
            .zip(buckets)
            .map(|((index, path), bucket)| (index, path, bucket))
            .collect();

        let counts: Vec<Result<usize, MiningError>> = pool.install(|| {
            jobs.par_iter()
                .map(|(index, path, bucket)| {
                    write_shard(*index, path, bucket, itemsets, min_confidence, filter)
                })
                .collect()
        });
        let rules_per_shard = counts.into_iter().collect::<Result<Vec<_>, _>>()?;

        let summary = GenerationSummary { rules_per_shard };
        info!(
            shards = threads,
            rules = summary.total_rules(),
            min_confidence,
            filter = filter.name(),
            duration_ms = start.elapsed().as_millis() as u64,
            "rule generation complete"
        );
        Ok(summary)
    }

    fn name(&self) -> &str {
        "sharded"
    }
}

fn write_shard(
    index: usize,
    path: &Path,
    bucket: &[(&Itemset, u64)],
    itemsets: &ItemsetDictionary,
    min_confidence: f64,
    filter: &dyn RuleFilter,
) -> Result<usize, MiningError> {
    let file = File::create(path).map_err(|e| MiningError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for &(itemset, both) in bucket {
        for rule in
            ShardedRuleGenerator::rules_for_itemset(itemset, both, itemsets, min_confidence, filter)?
        {
            writeln!(writer, "{rule}").map_err(|e| MiningError::io(path, e))?;
            written += 1;
        }
    }
    writer.flush().map_err(|e| MiningError::io(path, e))?;
    debug!(shard = index, itemsets = bucket.len(), rules = written, "wrote rule shard");
    Ok(written)
}

/// Left side = items whose bit is set in `mask`; right side = the rest.
fn split(items: &[&Item], mask: u64) -> (Itemset, Itemset) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (bit, &item) in items.iter().enumerate() {
        if mask & (1u64 << bit) != 0 {
            left.push(item.clone());
        } else {
            right.push(item.clone());
        }
    }
    (Itemset::new(left), Itemset::new(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::AcceptAll;

    fn set(text: &str) -> Itemset {
        Itemset::parse(text).unwrap()
    }

    fn dictionary() -> ItemsetDictionary {
        let mut dict = ItemsetDictionary::new(10);
        dict.insert(set("a"), 8);
        dict.insert(set("b"), 4);
        dict.insert(set("a,b"), 4);
        dict
    }

    #[test]
    fn confidence_threshold_selects_rules() {
        let dict = dictionary();
        let rules =
            ShardedRuleGenerator::rules_for_itemset(&set("a,b"), 4, &dict, 0.6, &AcceptAll)
                .unwrap();
        let texts: Vec<String> = rules.iter().map(AssociationRule::serialize).collect();
        // b>a has confidence 1.0, a>b only 0.5.
        assert_eq!(texts, vec!["b>a"]);
    }

    #[test]
    fn missing_left_support_is_a_fault() {
        let mut dict = ItemsetDictionary::new(10);
        dict.insert(set("a,b"), 4);
        let err = ShardedRuleGenerator::rules_for_itemset(&set("a,b"), 4, &dict, 0.0, &AcceptAll)
            .unwrap_err();
        assert!(matches!(
            err,
            MiningError::Dictionary(DictionaryError::MissingItemset {
                role: ItemsetRole::Left,
                ..
            })
        ));
    }

    #[test]
    fn every_proper_split_is_enumerated() {
        let mut dict = ItemsetDictionary::new(10);
        for text in ["a", "b", "c", "a,b", "a,c", "b,c"] {
            dict.insert(set(text), 5);
        }
        let rules =
            ShardedRuleGenerator::rules_for_itemset(&set("a,b,c"), 5, &dict, 0.0, &AcceptAll)
                .unwrap();
        assert_eq!(rules.len(), 6);
    }
}

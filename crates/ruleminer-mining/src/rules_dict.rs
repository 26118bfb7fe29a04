//! Rules dictionary: the merged index over every rule shard of a run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use ruleminer_core::errors::{DictionaryError, ParseError};
use ruleminer_core::files::ShardSet;
use ruleminer_core::types::AssociationRule;

/// Deterministic union of the rule shards.
///
/// Iteration follows insertion order: shard order, then line order within a
/// shard. Rule texts are unique across the whole dictionary.
#[derive(Debug, Clone, Default)]
pub struct RulesDictionary {
    rules: Vec<AssociationRule>,
    /// Rule text -> (position in `rules`, shard it came from).
    index: FxHashMap<String, (usize, usize)>,
    shards_loaded: usize,
}

impl RulesDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every shard of `shards`, calling [`Self::load_from_file`] exactly
    /// once per shard, in shard order.
    pub fn load_shards(shards: &ShardSet) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();
        for (index, path) in shards.iter() {
            dict.load_from_file(index, path)?;
        }
        debug!(
            shards = dict.shards_loaded,
            rules = dict.len(),
            "loaded rules dictionary"
        );
        Ok(dict)
    }

    /// Merge one shard into the dictionary. Returns the number of rules added.
    pub fn load_from_file(&mut self, shard: usize, path: &Path) -> Result<usize, DictionaryError> {
        let file = File::open(path).map_err(|e| DictionaryError::from_io(path, e))?;
        let mut added = 0;
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| DictionaryError::from_io(path, e))?;
            let rule = AssociationRule::parse(&line).map_err(|e| {
                DictionaryError::Parse(ParseError::InvalidLine {
                    path: path.display().to_string(),
                    line: idx + 1,
                    message: e.to_string(),
                })
            })?;
            self.insert(shard, rule)?;
            added += 1;
        }
        self.shards_loaded += 1;
        debug!(shard, path = %path.display(), rules = added, "merged rule shard");
        Ok(added)
    }

    fn insert(&mut self, shard: usize, rule: AssociationRule) -> Result<(), DictionaryError> {
        let text = rule.serialize();
        if let Some(&(_, first_shard)) = self.index.get(&text) {
            return Err(DictionaryError::DuplicateRule {
                rule: text,
                first_shard,
                second_shard: shard,
            });
        }
        self.index.insert(text, (self.rules.len(), shard));
        self.rules.push(rule);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of shard files merged so far.
    pub fn shards_loaded(&self) -> usize {
        self.shards_loaded
    }

    pub fn contains(&self, rule_text: &str) -> bool {
        self.index.contains_key(rule_text)
    }

    pub fn get(&self, rule_text: &str) -> Option<&AssociationRule> {
        self.index.get(rule_text).map(|&(pos, _)| &self.rules[pos])
    }

    /// Shard index a rule was read from.
    pub fn shard_of(&self, rule_text: &str) -> Option<usize> {
        self.index.get(rule_text).map(|&(_, shard)| shard)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssociationRule> + '_ {
        self.rules.iter()
    }

    pub fn into_rules(self) -> Vec<AssociationRule> {
        self.rules
    }
}

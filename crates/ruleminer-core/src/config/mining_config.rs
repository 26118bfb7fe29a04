//! Mining configuration and the per-run mining parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FILTER, DEFAULT_ITEMSET_MAX_SIZE, DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT,
    DEFAULT_THREADS,
};

/// Configuration for the mining and rule-generation stages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support as a ratio of the dataset size. Default: 0.05.
    pub min_support: Option<f64>,
    /// Minimum rule confidence. Default: 0.5.
    pub min_confidence: Option<f64>,
    /// Largest itemset the miner will grow. Default: 4.
    pub itemset_max_size: Option<usize>,
    /// Worker threads, and therefore rule shards. Default: 4.
    pub threads: Option<usize>,
    /// Name of the filter bundle used for rule generation. Default: "default".
    pub filter: Option<String>,
}

impl MiningConfig {
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }

    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    pub fn effective_itemset_max_size(&self) -> usize {
        self.itemset_max_size.unwrap_or(DEFAULT_ITEMSET_MAX_SIZE)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }
}

/// Mining parameters handed to the itemset and rule stages of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmParams {
    pub min_support: f64,
    pub min_confidence: f64,
    pub itemset_max_size: usize,
}

impl Default for ArmParams {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            itemset_max_size: DEFAULT_ITEMSET_MAX_SIZE,
        }
    }
}

impl From<&MiningConfig> for ArmParams {
    fn from(config: &MiningConfig) -> Self {
        Self {
            min_support: config.effective_min_support(),
            min_confidence: config.effective_min_confidence(),
            itemset_max_size: config.effective_itemset_max_size(),
        }
    }
}

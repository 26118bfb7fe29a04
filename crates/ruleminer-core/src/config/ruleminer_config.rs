//! Top-level ruleminer configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ArmParams, FilesConfig, MiningConfig, PrefixFilterConfig};
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_FILTER};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RULEMINER_*`)
/// 3. Project config (`ruleminer.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuleMinerConfig {
    pub mining: MiningConfig,
    pub files: FilesConfig,
    /// Named prefix filter bundles, in addition to the built-in `default`.
    pub filters: BTreeMap<String, PrefixFilterConfig>,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_support: Option<f64>,
    pub min_confidence: Option<f64>,
    pub itemset_max_size: Option<usize>,
    pub threads: Option<usize>,
    pub filter: Option<String>,
    pub work_dir: Option<PathBuf>,
}

impl RuleMinerConfig {
    /// Load configuration with layered resolution and validate the result.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1: explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no env or override layers).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RuleMinerConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mining.min_support", config.mining.min_support),
            ("mining.min_confidence", config.mining.min_confidence),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if config.mining.effective_itemset_max_size() < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.itemset_max_size".to_string(),
                message: "must be at least 2 to form a rule".to_string(),
            });
        }
        if config.mining.effective_threads() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (name, filter) in &config.filters {
            if name == DEFAULT_FILTER {
                return Err(ConfigError::ValidationFailed {
                    field: format!("filters.{name}"),
                    message: "the built-in default bundle cannot be redefined".to_string(),
                });
            }
            if filter.left_prefixes.is_empty() || filter.right_prefixes.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("filters.{name}"),
                    message: "left_prefixes and right_prefixes must both be non-empty"
                        .to_string(),
                });
            }
        }
        Ok(())
    }

    /// Mining parameters for one run.
    pub fn arm_params(&self) -> ArmParams {
        ArmParams::from(&self.mining)
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut RuleMinerConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: RuleMinerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut RuleMinerConfig, other: &RuleMinerConfig) {
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.min_confidence.is_some() {
            base.mining.min_confidence = other.mining.min_confidence;
        }
        if other.mining.itemset_max_size.is_some() {
            base.mining.itemset_max_size = other.mining.itemset_max_size;
        }
        if other.mining.threads.is_some() {
            base.mining.threads = other.mining.threads;
        }
        if other.mining.filter.is_some() {
            base.mining.filter = other.mining.filter.clone();
        }
        if other.files.work_dir.is_some() {
            base.files.work_dir = other.files.work_dir.clone();
        }
        for (name, filter) in &other.filters {
            base.filters.insert(name.clone(), filter.clone());
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RULEMINER_MIN_SUPPORT`, `RULEMINER_THREADS`, etc.
    fn apply_env_overrides(config: &mut RuleMinerConfig) {
        if let Some(v) = parse_env::<f64>("RULEMINER_MIN_SUPPORT") {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = parse_env::<f64>("RULEMINER_MIN_CONFIDENCE") {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = parse_env::<usize>("RULEMINER_ITEMSET_MAX_SIZE") {
            config.mining.itemset_max_size = Some(v);
        }
        if let Some(v) = parse_env::<usize>("RULEMINER_THREADS") {
            config.mining.threads = Some(v);
        }
        if let Ok(val) = std::env::var("RULEMINER_FILTER") {
            config.mining.filter = Some(val);
        }
        if let Ok(val) = std::env::var("RULEMINER_WORK_DIR") {
            config.files.work_dir = Some(PathBuf::from(val));
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut RuleMinerConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = overrides.min_confidence {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = overrides.itemset_max_size {
            config.mining.itemset_max_size = Some(v);
        }
        if let Some(v) = overrides.threads {
            config.mining.threads = Some(v);
        }
        if let Some(ref v) = overrides.filter {
            config.mining.filter = Some(v.clone());
        }
        if let Some(ref v) = overrides.work_dir {
            config.files.work_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an env var; unparseable values are ignored with a warning.
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

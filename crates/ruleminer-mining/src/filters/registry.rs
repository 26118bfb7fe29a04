//! Registry mapping filter names to bundles, resolved at configuration time.

use std::collections::BTreeMap;
use std::sync::Arc;

use ruleminer_core::config::RuleMinerConfig;
use ruleminer_core::constants::DEFAULT_FILTER;
use ruleminer_core::errors::ConfigError;

use super::{AcceptAll, PrefixFilter, RuleFilter};

/// Named filter bundles.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    bundles: BTreeMap<String, Arc<dyn RuleFilter>>,
}

impl FilterRegistry {
    /// A registry holding only the built-in `default` bundle.
    pub fn with_builtins() -> Self {
        let mut bundles: BTreeMap<String, Arc<dyn RuleFilter>> = BTreeMap::new();
        bundles.insert(DEFAULT_FILTER.to_string(), Arc::new(AcceptAll));
        Self { bundles }
    }

    /// Built-ins plus every prefix bundle declared under `[filters.*]`.
    pub fn from_config(config: &RuleMinerConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::with_builtins();
        for (name, filter) in &config.filters {
            registry.register(Arc::new(PrefixFilter::from_config(name, filter)))?;
        }
        Ok(registry)
    }

    /// Add a bundle under its own name. Names are unique.
    pub fn register(&mut self, filter: Arc<dyn RuleFilter>) -> Result<(), ConfigError> {
        let name = filter.name().to_string();
        if self.bundles.contains_key(&name) {
            return Err(ConfigError::ValidationFailed {
                field: format!("filters.{name}"),
                message: "a filter bundle with this name is already registered".to_string(),
            });
        }
        self.bundles.insert(name, filter);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn RuleFilter>, ConfigError> {
        self.bundles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownFilter {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bundles.keys().map(String::as_str)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

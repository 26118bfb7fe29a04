//! Configuration system for ruleminer.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod files_config;
pub mod filter_config;
pub mod mining_config;
pub mod ruleminer_config;

pub use files_config::FilesConfig;
pub use filter_config::PrefixFilterConfig;
pub use mining_config::{ArmParams, MiningConfig};
pub use ruleminer_config::{ConfigOverrides, RuleMinerConfig};

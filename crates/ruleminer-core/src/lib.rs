//! # ruleminer-core
//!
//! Foundation crate for the ruleminer workspace.
//! Defines the item/itemset/rule types, per-subsystem errors, layered config,
//! the intermediate file layout, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod files;
pub mod logging;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ArmParams, RuleMinerConfig};
pub use errors::{PipelineError, RuleMinerResult};
pub use files::{ArmFiles, ShardSet};
pub use types::{AssociationRule, FrequencyCombo, Item, Itemset};

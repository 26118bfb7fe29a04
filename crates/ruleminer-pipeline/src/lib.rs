//! # ruleminer-pipeline
//!
//! The [`RuleMiner`] orchestrator and the pieces only it needs: item
//! relation matrices, the rule feature schema and extractor, and the
//! feature file store.
//!
//! Stage order is fixed: frequent itemsets, then rule shards, then features.
//! Each stage reads only what the previous one left in the work directory.

pub mod features;
pub mod orchestrator;
pub mod relation;

pub use features::{FeatureFile, FeatureRecord, FeatureSchema, FeatureVector};
pub use orchestrator::RuleMiner;
pub use relation::{phi_relation_matrix, DenseRelationMatrix, RelationMatrix};

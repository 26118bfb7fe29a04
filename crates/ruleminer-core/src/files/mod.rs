//! Intermediate file layout shared by every pipeline stage.

pub mod layout;
pub mod shards;

pub use layout::ArmFiles;
pub use shards::ShardSet;

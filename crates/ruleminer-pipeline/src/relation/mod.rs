//! Item relation matrices: `(item, feature) -> f64`.

pub mod matrix;
pub mod phi;

pub use matrix::{DenseRelationMatrix, RelationMatrix};
pub use phi::phi_relation_matrix;

//! Rule feature vectors: schema, construction, and the feature file.

pub mod extractor;
pub mod store;
pub mod vector;

pub use extractor::{extract_for_itemset, feature_names};
pub use store::{FeatureFile, FeatureRecord, FeatureWriter};
pub use vector::{FeatureSchema, FeatureVector};

//! Error handling for ruleminer.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod dictionary_error;
pub mod error_code;
pub mod feature_error;
pub mod mining_error;
pub mod parse_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use dictionary_error::{DictionaryError, ItemsetRole};
pub use error_code::RuleMinerErrorCode;
pub use feature_error::FeatureError;
pub use mining_error::MiningError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, RuleMinerResult};

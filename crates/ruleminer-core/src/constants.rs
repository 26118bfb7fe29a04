//! Workspace-wide constants.

/// Default number of worker threads handed to the miner and rule generator.
pub const DEFAULT_THREADS: usize = 4;

/// Default minimum support ratio.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.05;

/// Default minimum confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Default maximum itemset size.
pub const DEFAULT_ITEMSET_MAX_SIZE: usize = 4;

/// Name of the filter bundle that accepts everything.
pub const DEFAULT_FILTER: &str = "default";

/// Default directory for intermediate files.
pub const DEFAULT_WORK_DIR: &str = "tmp";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "ruleminer.toml";

/// Intermediate file names inside the work directory.
pub const ITEMSET_FILE_NAME: &str = "itemsets.txt";
pub const RULE_SHARD_PREFIX: &str = "rules";
pub const RULE_SHARD_EXTENSION: &str = "txt";
pub const FEATURE_FILE_NAME: &str = "features.txt";

/// Separator between the support count and the items of an itemset line.
pub const SUPPORT_SEPARATOR: char = '\t';

/// Separator between items inside an itemset.
pub const ITEM_SEPARATOR: char = ',';

/// Separator between the left and right side of a serialized rule.
pub const SIDE_SEPARATOR: char = '>';

/// Delimiter of the interestingness output file.
pub const MEASURE_DELIMITER: char = ';';

/// Number of interestingness measures evaluated per rule.
pub const MEASURE_COUNT: usize = 32;

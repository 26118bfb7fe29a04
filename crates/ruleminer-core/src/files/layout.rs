//! Paths of every intermediate artifact, derived from one work directory.

use std::path::{Path, PathBuf};

use crate::constants::{
    FEATURE_FILE_NAME, ITEMSET_FILE_NAME, RULE_SHARD_EXTENSION, RULE_SHARD_PREFIX,
};

/// Explicit file layout passed into each stage.
///
/// Two layouts with different work directories never share a file, so
/// independent pipelines (and tests) can run side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmFiles {
    work_dir: PathBuf,
}

impl ArmFiles {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Support-annotated itemsets written by the miner.
    pub fn itemset_file(&self) -> PathBuf {
        self.work_dir.join(ITEMSET_FILE_NAME)
    }

    /// Rule shard `index`, e.g. `rules.0.txt`.
    pub fn rule_file(&self, index: usize) -> PathBuf {
        self.work_dir
            .join(format!("{RULE_SHARD_PREFIX}.{index}.{RULE_SHARD_EXTENSION}"))
    }

    /// Non-redundant rules with their feature vectors.
    pub fn feature_file(&self) -> PathBuf {
        self.work_dir.join(FEATURE_FILE_NAME)
    }

    /// Create the work directory if it does not exist yet.
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_work_dir() {
        let files = ArmFiles::new("/data/run-1");
        assert_eq!(files.itemset_file(), PathBuf::from("/data/run-1/itemsets.txt"));
        assert_eq!(files.rule_file(3), PathBuf::from("/data/run-1/rules.3.txt"));
        assert_eq!(files.feature_file(), PathBuf::from("/data/run-1/features.txt"));
    }
}

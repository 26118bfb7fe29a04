//! Intermediate file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WORK_DIR;
use crate::files::ArmFiles;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    /// Directory holding itemsets, rule shards and the feature file. Default: "tmp".
    pub work_dir: Option<PathBuf>,
}

impl FilesConfig {
    pub fn effective_work_dir(&self) -> PathBuf {
        self.work_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORK_DIR))
    }

    pub fn layout(&self) -> ArmFiles {
        ArmFiles::new(self.effective_work_dir())
    }
}

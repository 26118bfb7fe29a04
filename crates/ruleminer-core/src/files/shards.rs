//! Indexed rule shards.

use std::path::{Path, PathBuf};

use super::ArmFiles;

/// The fixed, ordered collection of rule shard paths for one run.
///
/// Shard `i` is always `layout.rule_file(i)` for `i in 0..count`; shards are
/// never discovered by scanning the work directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSet {
    paths: Vec<PathBuf>,
}

impl ShardSet {
    pub fn new(layout: &ArmFiles, count: usize) -> Self {
        Self {
            paths: (0..count).map(|i| layout.rule_file(i)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// `(index, path)` pairs in shard order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> + '_ {
        self.paths.iter().map(PathBuf::as_path).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shards_are_indexed_in_order() {
        let layout = ArmFiles::new("work");
        let shards = ShardSet::new(&layout, 3);
        assert_eq!(shards.len(), 3);
        let indices: Vec<usize> = shards.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(shards.path(2), Some(layout.rule_file(2).as_path()));
        assert_eq!(shards.path(3), None);
    }
}

//! Scoped rayon pools sized to the configured thread count.

use rayon::{ThreadPool, ThreadPoolBuilder};
use ruleminer_core::errors::MiningError;

/// Build a dedicated pool of exactly `threads` workers.
///
/// Never touches the global pool, so two pipelines with different thread
/// counts can run in one process.
pub(crate) fn build_pool(threads: usize) -> Result<ThreadPool, MiningError> {
    if threads == 0 {
        return Err(MiningError::InvalidParameter {
            name: "threads",
            message: "must be greater than 0".to_string(),
        });
    }
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("ruleminer-worker-{i}"))
        .build()
        .map_err(|e| MiningError::ThreadPool {
            threads,
            message: e.to_string(),
        })
}

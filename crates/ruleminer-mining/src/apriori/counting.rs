//! Parallel support counting. Callers run these inside a scoped pool.

use rayon::prelude::*;

use super::candidates::Candidate;

/// Support of every single item id in `0..universe`.
pub(crate) fn count_singletons(transactions: &[Vec<u32>], universe: usize) -> Vec<u64> {
    transactions
        .par_iter()
        .fold(
            || vec![0u64; universe],
            |mut counts, transaction| {
                for &id in transaction {
                    counts[id as usize] += 1;
                }
                counts
            },
        )
        .reduce(
            || vec![0u64; universe],
            |mut acc, part| {
                for (a, p) in acc.iter_mut().zip(part) {
                    *a += p;
                }
                acc
            },
        )
}

/// Support of each candidate, in candidate order.
pub(crate) fn count_candidates(candidates: &[Candidate], transactions: &[Vec<u32>]) -> Vec<u64> {
    candidates
        .par_iter()
        .map(|candidate| {
            transactions
                .iter()
                .filter(|t| is_subset(candidate, t))
                .count() as u64
        })
        .collect()
}

/// Merge-based subset test over two sorted id slices.
pub(crate) fn is_subset(needle: &[u32], haystack: &[u32]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut rest = haystack.iter();
    'outer: for &id in needle {
        for &h in rest.by_ref() {
            if h == id {
                continue 'outer;
            }
            if h > id {
                return false;
            }
        }
        return false;
    }
    true
}

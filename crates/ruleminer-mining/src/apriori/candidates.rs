//! Level-wise candidate generation over interned item ids.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Sorted item ids of one itemset.
pub(crate) type Candidate = SmallVec<[u32; 8]>;

/// Join frequent `k`-itemsets sharing a `k-1` prefix into `k+1` candidates and
/// drop every candidate with an infrequent `k`-subset (downward closure).
///
/// `frequent` must be sorted lexicographically; the output is sorted too.
pub(crate) fn next_level(frequent: &[Candidate]) -> Vec<Candidate> {
    let known: FxHashSet<&[u32]> = frequent.iter().map(|c| c.as_slice()).collect();
    let mut out = Vec::new();

    for (i, a) in frequent.iter().enumerate() {
        let prefix = &a[..a.len() - 1];
        for b in &frequent[i + 1..] {
            if &b[..b.len() - 1] != prefix {
                break;
            }
            let mut joined = a.clone();
            joined.push(b[b.len() - 1]);
            if all_subsets_frequent(&joined, &known) {
                out.push(joined);
            }
        }
    }
    out
}

/// The two subsets dropping one of the last two ids are the join parents.
fn all_subsets_frequent(candidate: &Candidate, known: &FxHashSet<&[u32]>) -> bool {
    let parents_from = candidate.len().saturating_sub(2);
    let mut subset: Candidate = SmallVec::with_capacity(candidate.len() - 1);
    (0..parents_from).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &id)| id),
        );
        known.contains(subset.as_slice())
    })
}

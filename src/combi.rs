use itertools::Itertools;
use rayon::prelude::*;

use crate::error::Result;
use crate::itemset::ItemSet;

/// Self-join of a sorted slice of equal-length itemsets.
///
/// Every pair `(i, j)` with `i < j` is visited; partial-equal pairs yield the
/// itemset at `i` extended with the last item of the one at `j`. Pairs that
/// do not share a prefix are skipped without ending the scan for `i`.
pub fn join_step(sorted: &[ItemSet]) -> Result<Vec<ItemSet>> {
    sorted
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| join_pair(a, b))
        .collect()
}

/// Same output, same order as [`join_step`], one row of pairs per task.
pub fn par_join_step(sorted: &[ItemSet]) -> Result<Vec<ItemSet>> {
    (0..sorted.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let a = &sorted[i];
            sorted[i + 1..].iter().filter_map(move |b| join_pair(a, b))
        })
        .collect()
}

fn join_pair(a: &ItemSet, b: &ItemSet) -> Option<Result<ItemSet>> {
    if !a.partial_equal(b) {
        return None;
    }
    b.last().map(|last| a.with_item(last))
}

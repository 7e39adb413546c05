use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    config::GeneratorConfig,
    error::{AprioriError, Result},
    itemset::ItemSet,
    itemsets::{candidates::CandidateGenerator, index::IndexPolicy},
    support,
    types::{ItemId, ItemsetLength},
};

fn to_py_err(err: AprioriError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn convert_itemsets(itemsets: Vec<Vec<ItemId>>) -> Result<Vec<ItemSet>> {
    itemsets.into_iter().map(ItemSet::new).collect()
}

pub fn convert_candidates(candidates: Vec<ItemSet>) -> Vec<Vec<ItemId>> {
    candidates.into_iter().map(Vec::from).collect()
}

/// Candidate itemsets of length `target_size` from frequent itemsets of
/// length `target_size - 1`.
#[pyfunction(exact = "false", parallel = "false")]
#[pyo3(text_signature = "(itemsets, target_size, /, *, exact, parallel)")]
pub fn generate_candidates(
    py: Python,
    itemsets: Vec<Vec<ItemId>>,
    target_size: ItemsetLength,
    exact: bool,
    parallel: bool,
) -> PyResult<Vec<Vec<ItemId>>> {
    let index_policy = if exact {
        IndexPolicy::Exact
    } else {
        IndexPolicy::Fingerprint
    };
    let config = GeneratorConfig::default()
        .with_index_policy(index_policy)
        .with_parallel(parallel);

    py.allow_threads(move || {
        let itemsets = convert_itemsets(itemsets)?;
        CandidateGenerator::new(config).generate(&itemsets, target_size)
    })
    .map(convert_candidates)
    .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(text_signature = "(min_support, num_transactions, item_count)")]
pub fn has_min_support(min_support: f64, num_transactions: usize, item_count: usize) -> bool {
    support::has_min_support(min_support, num_transactions, item_count)
}

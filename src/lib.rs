//! Candidate generation for one pass of Apriori frequent itemset mining.
//!
//! The frequent itemsets of length `k` are self-joined on their shared
//! `k - 1` prefix, and every joined itemset with an infrequent immediate
//! subset is pruned before support counting.

pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod observer;
pub mod support;
pub mod transaction;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use crate::{
    config::GeneratorConfig,
    error::{AprioriError, Result},
    itemset::ItemSet,
    itemsets::{
        candidates::{generate_candidates, CandidateGenerator},
        index::{ContainmentIndex, IndexPolicy},
    },
    observer::{NoopObserver, PassObserver, TracingObserver},
    support::{has_min_support, MinSupport},
    transaction::{parse_transactions, Transaction},
};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pymodule]
fn apriori_candidates(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::generate_candidates, m)?)?;
    m.add_function(wrap_pyfunction!(wrapper::has_min_support, m)?)?;
    Ok(())
}

use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    combi::{join_step, par_join_step},
    config::GeneratorConfig,
    error::{AprioriError, Result},
    itemset::ItemSet,
    itemsets::index::ContainmentIndex,
    observer::{PassObserver, TracingObserver},
    types::{ItemsetLength, Itemsets},
};

/// Builds the candidate itemsets of one pass from the frequent itemsets of
/// the previous one.
#[derive(Debug, Clone)]
pub struct CandidateGenerator<O = TracingObserver> {
    config: GeneratorConfig,
    observer: O,
}

impl CandidateGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            observer: TracingObserver,
        }
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<O: PassObserver> CandidateGenerator<O> {
    pub fn with_observer<P: PassObserver>(self, observer: P) -> CandidateGenerator<P> {
        CandidateGenerator {
            config: self.config,
            observer,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate candidates of length `target_size` from frequent itemsets of
    /// length `target_size - 1`.
    ///
    /// The input is left as given. Candidates come back in the order the
    /// self-join produced them, minus those with an infrequent subset.
    pub fn generate(
        &self,
        prev_frequent: &[ItemSet],
        target_size: ItemsetLength,
    ) -> Result<Itemsets> {
        validate(prev_frequent, target_size)?;

        let index = ContainmentIndex::build(self.config.index_policy, prev_frequent);

        let mut sorted = prev_frequent.to_vec();
        sorted.sort_unstable();
        if let Some((duplicate, _)) = sorted.iter().tuple_windows().find(|(a, b)| a == b) {
            return Err(AprioriError::DuplicateItemSet(duplicate.clone()));
        }

        let pre_candidates = if self.config.parallel {
            par_join_step(&sorted)?
        } else {
            join_step(&sorted)?
        };
        self.observer.joined(target_size, pre_candidates.len());

        let candidates: Itemsets = if self.config.parallel {
            pre_candidates
                .into_par_iter()
                .filter(|candidate| is_downward_closed(&index, candidate))
                .collect()
        } else {
            pre_candidates
                .into_iter()
                .filter(|candidate| is_downward_closed(&index, candidate))
                .collect()
        };
        self.observer.pruned(target_size, candidates.len());

        Ok(candidates)
    }
}

/// Generate candidates with the default configuration.
pub fn generate_candidates(prev_frequent: &[ItemSet], target_size: ItemsetLength) -> Result<Itemsets> {
    CandidateGenerator::new(GeneratorConfig::default()).generate(prev_frequent, target_size)
}

/// True when every immediate subset of `candidate` is in the index.
pub fn is_downward_closed(index: &ContainmentIndex, candidate: &ItemSet) -> bool {
    match candidate.subsets().find(|subset| !index.contains(subset)) {
        Some(missing) => {
            tracing::trace!(%candidate, %missing, "pruned candidate");
            false
        }
        None => true,
    }
}

fn validate(prev_frequent: &[ItemSet], target_size: ItemsetLength) -> Result<()> {
    if target_size < 2 {
        return Err(AprioriError::TargetSizeTooSmall(target_size));
    }

    let expected = target_size - 1;
    match prev_frequent.iter().find(|itemset| itemset.len() != expected) {
        Some(itemset) => Err(AprioriError::LengthMismatch {
            itemset: itemset.clone(),
            expected,
            found: itemset.len(),
        }),
        None => Ok(()),
    }
}

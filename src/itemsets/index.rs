use std::collections::{HashMap, HashSet};

use crate::itemset::ItemSet;
use crate::types::Fingerprint;

/// How membership in the previous pass is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Match on fingerprint only. The first itemset seen for a fingerprint
    /// represents it; colliding itemsets are reported as present.
    Fingerprint,
    /// Match on full itemset equality.
    Exact,
}

impl Default for IndexPolicy {
    fn default() -> Self {
        IndexPolicy::Fingerprint
    }
}

/// Read-only lookup over the frequent itemsets of the previous pass.
#[derive(Debug)]
pub enum ContainmentIndex<'a> {
    Fingerprint(HashMap<Fingerprint, &'a ItemSet>),
    Exact(HashSet<&'a ItemSet>),
}

impl<'a> ContainmentIndex<'a> {
    pub fn build(policy: IndexPolicy, itemsets: &'a [ItemSet]) -> Self {
        match policy {
            IndexPolicy::Fingerprint => {
                let mut map = HashMap::with_capacity(itemsets.len());
                for itemset in itemsets {
                    map.entry(itemset.fingerprint()).or_insert(itemset);
                }
                ContainmentIndex::Fingerprint(map)
            }
            IndexPolicy::Exact => ContainmentIndex::Exact(itemsets.iter().collect()),
        }
    }

    pub fn policy(&self) -> IndexPolicy {
        match self {
            ContainmentIndex::Fingerprint(_) => IndexPolicy::Fingerprint,
            ContainmentIndex::Exact(_) => IndexPolicy::Exact,
        }
    }

    pub fn contains(&self, itemset: &ItemSet) -> bool {
        match self {
            ContainmentIndex::Fingerprint(map) => map.contains_key(&itemset.fingerprint()),
            ContainmentIndex::Exact(set) => set.contains(itemset),
        }
    }

    /// The stored itemset that `itemset` resolves to. Under the fingerprint
    /// policy this may be a different itemset with the same fingerprint.
    pub fn representative(&self, itemset: &ItemSet) -> Option<&'a ItemSet> {
        match self {
            ContainmentIndex::Fingerprint(map) => map.get(&itemset.fingerprint()).copied(),
            ContainmentIndex::Exact(set) => set.get(itemset).copied(),
        }
    }

    /// Number of distinct keys held.
    pub fn len(&self) -> usize {
        match self {
            ContainmentIndex::Fingerprint(map) => map.len(),
            ContainmentIndex::Exact(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use crate::itemsets::index::IndexPolicy;

/// Knobs for one candidate generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub index_policy: IndexPolicy,
    /// Run the self-join and pruning on the rayon thread pool.
    pub parallel: bool,
}

impl GeneratorConfig {
    pub fn with_index_policy(mut self, index_policy: IndexPolicy) -> Self {
        self.index_policy = index_policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential_fingerprint() {
        let config = GeneratorConfig::default();

        assert_eq!(config.index_policy, IndexPolicy::Fingerprint);
        assert!(!config.parallel);
    }

    #[test]
    fn setters_chain() {
        let config = GeneratorConfig::default()
            .with_index_policy(IndexPolicy::Exact)
            .with_parallel(true);

        assert_eq!(config.index_policy, IndexPolicy::Exact);
        assert!(config.parallel);
    }
}

use crate::types::ItemsetLength;

/// Receives candidate counts from each generation call.
pub trait PassObserver {
    /// Candidates produced by the self-join, before pruning.
    fn joined(&self, target_size: ItemsetLength, candidates: usize);

    /// Candidates that survived pruning.
    fn pruned(&self, target_size: ItemsetLength, candidates: usize);
}

/// Reports counts as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PassObserver for TracingObserver {
    fn joined(&self, target_size: ItemsetLength, candidates: usize) {
        tracing::debug!(target_size, candidates, "candidates before pruning");
    }

    fn pruned(&self, target_size: ItemsetLength, candidates: usize) {
        tracing::debug!(target_size, candidates, "candidates after pruning");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PassObserver for NoopObserver {
    fn joined(&self, _: ItemsetLength, _: usize) {}

    fn pruned(&self, _: ItemsetLength, _: usize) {}
}

impl<O: PassObserver + ?Sized> PassObserver for &O {
    fn joined(&self, target_size: ItemsetLength, candidates: usize) {
        (**self).joined(target_size, candidates)
    }

    fn pruned(&self, target_size: ItemsetLength, candidates: usize) {
        (**self).pruned(target_size, candidates)
    }
}

use crate::error::{AprioriError, Result};

/// Whether `item_count` occurrences out of `num_transactions` reach
/// `min_support`. With no transactions nothing is supported.
pub fn has_min_support(min_support: f64, num_transactions: usize, item_count: usize) -> bool {
    if num_transactions == 0 {
        return false;
    }
    let share = item_count as f64 / num_transactions as f64;
    share >= min_support
}

/// A minimum-support ratio in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinSupport(f64);

impl MinSupport {
    pub fn new(ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(AprioriError::InvalidMinSupport(ratio));
        }
        Ok(Self(ratio))
    }

    pub fn ratio(&self) -> f64 {
        self.0
    }

    pub fn is_met(&self, num_transactions: usize, item_count: usize) -> bool {
        has_min_support(self.0, num_transactions, item_count)
    }
}

use std::num::ParseIntError;

use thiserror::Error;

use crate::itemset::ItemSet;
use crate::types::{ItemId, TransactionId};

/// Result type local to this crate.
pub type Result<T> = std::result::Result<T, AprioriError>;

#[derive(Debug, Error)]
pub enum AprioriError {
    #[error("items must be distinct and strictly ascending, got {items:?}")]
    UnsortedItems { items: Vec<ItemId> },

    #[error("cannot append {item} after {last}: items must stay strictly ascending")]
    NotAscending { last: ItemId, item: ItemId },

    #[error("position {position} out of range for itemset of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("target size must be at least 2, got {0}")]
    TargetSizeTooSmall(usize),

    #[error("itemset {itemset} has length {found}, expected {expected}")]
    LengthMismatch {
        itemset: ItemSet,
        expected: usize,
        found: usize,
    },

    #[error("itemset {0} appears more than once")]
    DuplicateItemSet(ItemSet),

    #[error("malformed transaction record {id}: bad token '{token}'")]
    MalformedTransaction {
        id: TransactionId,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("minimum support must lie within [0, 1], got {0}")]
    InvalidMinSupport(f64),
}

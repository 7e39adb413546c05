use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::{AprioriError, Result};
use crate::types::{Fingerprint, ItemId};

const FINGERPRINT_SEED: Fingerprint = 1;
const FINGERPRINT_MULTIPLIER: Fingerprint = 31;

/// An ordered, duplicate-free combination of items.
///
/// Items are kept in strictly ascending order. Every operation that derives
/// a new itemset returns a fresh value and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemSet {
    items: Vec<ItemId>,
}

impl ItemSet {
    pub fn new(items: Vec<ItemId>) -> Result<Self> {
        if !is_strictly_ascending(&items) {
            return Err(AprioriError::UnsortedItems { items });
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<ItemId> {
        self.items.get(position).copied()
    }

    pub fn first(&self) -> Option<ItemId> {
        self.items.first().copied()
    }

    pub fn last(&self) -> Option<ItemId> {
        self.items.last().copied()
    }

    /// All items except the last one.
    pub fn prefix(&self) -> &[ItemId] {
        match self.items.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Two itemsets of equal length are partial-equal when only their final
    /// items may differ. This is the self-join predicate.
    pub fn partial_equal(&self, other: &ItemSet) -> bool {
        !self.is_empty() && self.len() == other.len() && self.prefix() == other.prefix()
    }

    /// Returns a new itemset with `item` appended.
    pub fn with_item(&self, item: ItemId) -> Result<ItemSet> {
        if let Some(last) = self.last() {
            if item <= last {
                return Err(AprioriError::NotAscending { last, item });
            }
        }
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Ok(Self { items })
    }

    /// Returns a new itemset with the item at `position` removed.
    pub fn without(&self, position: usize) -> Result<ItemSet> {
        if position >= self.len() {
            return Err(AprioriError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }
        Ok(self.without_unchecked(position))
    }

    fn without_unchecked(&self, position: usize) -> ItemSet {
        let mut items = Vec::with_capacity(self.len() - 1);
        items.extend_from_slice(&self.items[..position]);
        items.extend_from_slice(&self.items[position + 1..]);
        Self { items }
    }

    /// Immediate subsets, one per removed position, in increasing position order.
    pub fn subsets(&self) -> impl Iterator<Item = ItemSet> + '_ {
        (0..self.len()).map(move |position| self.without_unchecked(position))
    }

    /// Rolling 32-bit hash over the ordered items (`h = 31 * h + item`, seeded
    /// with 1). Equal itemsets share a fingerprint; unequal ones may collide.
    pub fn fingerprint(&self) -> Fingerprint {
        self.items.iter().fold(FINGERPRINT_SEED, |hash, &item| {
            hash.wrapping_mul(FINGERPRINT_MULTIPLIER).wrapping_add(item)
        })
    }
}

fn is_strictly_ascending(items: &[ItemId]) -> bool {
    items.iter().tuple_windows().all(|(a, b)| a < b)
}

impl TryFrom<Vec<ItemId>> for ItemSet {
    type Error = AprioriError;

    fn try_from(items: Vec<ItemId>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<ItemSet> for Vec<ItemId> {
    fn from(itemset: ItemSet) -> Self {
        itemset.items
    }
}

impl Display for ItemSet {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

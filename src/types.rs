use crate::itemset::ItemSet;

pub type ItemId = i32;
pub type TransactionId = u64;
pub type Fingerprint = i32;

pub type ItemsetLength = usize;
pub type Itemsets = Vec<ItemSet>;

use crate::error::{AprioriError, Result};
use crate::types::{ItemId, TransactionId};

/// One parsed transaction record. Items are kept in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    items: Vec<ItemId>,
}

impl Transaction {
    pub fn new(id: TransactionId, items: Vec<ItemId>) -> Self {
        Self { id, items }
    }

    /// Parses a whitespace-delimited record of integers.
    ///
    /// A blank record has no items to read and is reported as malformed,
    /// the same as any non-integer token.
    pub fn parse(id: TransactionId, record: &str) -> Result<Self> {
        let record = record.trim();
        let tokens: Vec<&str> = if record.is_empty() {
            vec![record]
        } else {
            record.split_whitespace().collect()
        };

        let items = tokens
            .into_iter()
            .map(|token| parse_item(id, token))
            .collect::<Result<Vec<ItemId>>>()?;

        Ok(Self { id, items })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn parse_item(id: TransactionId, token: &str) -> Result<ItemId> {
    token
        .parse::<ItemId>()
        .map_err(|source| AprioriError::MalformedTransaction {
            id,
            token: token.to_owned(),
            source,
        })
}

/// Parses records in order, numbering them from 0. Stops at the first
/// malformed record.
pub fn parse_transactions<'a, I>(records: I) -> Result<Vec<Transaction>>
where
    I: IntoIterator<Item = &'a str>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(id, record)| Transaction::parse(id as TransactionId, record))
        .collect()
}

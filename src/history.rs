use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// An immutable fact describing one completed movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Money,
    at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Money, at: DateTime<Utc>) -> Self {
        Self { kind, amount, at }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Append-only log of completed movements for one account.
///
/// Records keep their insertion order, which is also chronological under
/// normal operation. Nothing is ever removed or rewritten.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Full log in append order, for statement rendering.
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Records of one kind, in append order. The iterator is lazy and can be
    /// restarted by calling again; only completed movements are counted.
    pub fn records_of_kind(
        &self,
        kind: TransactionKind,
    ) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().filter(move |record| record.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{TransactionId, TransactionKind};

/// an operation to run against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// apply to the account and record it in the account's history
    ///
    /// Nothing is recorded when the account rejects the operation.
    pub fn register(
        self,
        account: &mut Account,
        time_provider: &SafeTimeProvider,
    ) -> Result<TransactionRecord> {
        let balance_after = match self {
            Transaction::Deposit(amount) => account.deposit(amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(amount, time_provider)?,
        };

        let record = TransactionRecord {
            id: Uuid::new_v4(),
            kind: self.kind(),
            amount: self.amount(),
            balance_after,
            timestamp: time_provider.now(),
        };
        account.history_mut().append(record.clone());

        Ok(record)
    }
}

/// immutable record of an accepted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance_after: Money,
    pub timestamp: DateTime<Utc>,
}

/// append-only, ordered transaction log of one account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    pub fn deposits(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.of_kind(TransactionKind::Deposit)
    }

    pub fn withdrawals(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.of_kind(TransactionKind::Withdrawal)
    }

    pub fn total_deposited(&self) -> Money {
        self.deposits().map(|r| r.amount).sum()
    }

    pub fn total_withdrawn(&self) -> Money {
        self.withdrawals().map(|r| r.amount).sum()
    }

    fn of_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

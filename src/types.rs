use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{BankError, Result};

/// sequential account number, unique within a bank
pub type AccountNumber = u32;

/// unique identifier for a transaction record
pub type TransactionId = Uuid;

/// default branch (agency) code
pub const DEFAULT_BRANCH: &str = "0001";

/// client tax id (CPF), digits only
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxId(String);

impl TaxId {
    /// parse a tax id, dropping punctuation such as `123.456.789-00`
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(BankError::InvalidTaxId {
                input: input.to_string(),
            });
        }
        Ok(TaxId(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// transaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("DEPOSIT"),
            TransactionKind::Withdrawal => f.write_str("WITHDRAWAL"),
        }
    }
}

/// account kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountKind {
    /// checking account with daily withdrawal rules
    #[default]
    Current,
    /// bare account, balance rules only
    Plain,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Current => f.write_str("Current Account"),
            AccountKind::Plain => f.write_str("Account"),
        }
    }
}

use thiserror::Error;

use crate::decimal::Money;
use crate::types::AccountNumber;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("invalid amount: {amount} (must be positive)")]
    InvalidAmount {
        amount: Money,
    },

    #[error("daily withdrawal limit reached: {limit} withdrawals per day")]
    DailyLimitExceeded {
        limit: u32,
    },

    #[error("withdrawal limit exceeded: maximum {limit} per withdrawal, requested {requested}")]
    PerWithdrawalLimitExceeded {
        limit: Money,
        requested: Money,
    },

    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("client already registered with tax id {tax_id}")]
    ClientAlreadyExists {
        tax_id: String,
    },

    #[error("client not found: {tax_id}")]
    ClientNotFound {
        tax_id: String,
    },

    #[error("account not found: {number}")]
    AccountNotFound {
        number: AccountNumber,
    },

    #[error("invalid tax id: {input:?}")]
    InvalidTaxId {
        input: String,
    },

    #[error("invalid birth date {input:?}: expected DD/MM/YYYY")]
    InvalidBirthDate {
        input: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, BankError>;

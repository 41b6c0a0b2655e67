pub mod account;
pub mod bank;
pub mod client;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod statement;
pub mod transaction;
pub mod types;

// re-export key types
pub use account::Account;
pub use bank::Bank;
pub use client::Client;
pub use config::{AccountConfig, BankConfig, WithdrawalLimits};
pub use decimal::Money;
pub use errors::{BankError, Result};
pub use statement::{AccountSummary, ClientSummary, Statement};
pub use transaction::{History, Transaction, TransactionRecord};
pub use types::{AccountKind, AccountNumber, TaxId, TransactionId, TransactionKind};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

//! read-only views of accounts and clients
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::Account;
use crate::client::{Client, BIRTH_DATE_FORMAT};
use crate::config::utc_offset;
use crate::decimal::Money;
use crate::types::{AccountKind, AccountNumber, TransactionKind};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
const RULE_WIDTH: usize = 50;

/// account statement as of a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub branch: String,
    pub account_number: AccountNumber,
    pub holder: String,
    pub entries: Vec<StatementEntry>,
    pub total_deposited: Money,
    pub total_withdrawn: Money,
    pub balance: Money,
    pub limits: Option<LimitsView>,
    pub generated_at: DateTime<Utc>,
    /// offset timestamps are rendered in
    #[serde(with = "utc_offset", default = "utc_offset::utc")]
    pub utc_offset: FixedOffset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub index: usize,
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsView {
    pub withdrawals_today: u32,
    pub max_withdrawals_per_day: u32,
    pub max_per_withdrawal: Money,
}

impl Statement {
    pub fn build(account: &Account, holder: &Client, now: DateTime<Utc>) -> Self {
        let entries = account
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| StatementEntry {
                index: i + 1,
                kind: record.kind,
                amount: record.amount,
                timestamp: record.timestamp,
            })
            .collect();

        let limits = account.limits().map(|limits| LimitsView {
            withdrawals_today: account.withdrawals_today(now),
            max_withdrawals_per_day: limits.per_day,
            max_per_withdrawal: limits.per_withdrawal,
        });

        Statement {
            branch: account.branch().to_string(),
            account_number: account.number(),
            holder: holder.name().to_string(),
            entries,
            total_deposited: account.history().total_deposited(),
            total_withdrawn: account.history().total_withdrawn(),
            balance: account.balance(),
            limits,
            generated_at: now,
            utc_offset: account.utc_offset(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        writeln!(f, "{heavy}")?;
        writeln!(f, "STATEMENT")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Branch: {} | Account: {}", self.branch, self.account_number)?;
        writeln!(f, "Holder: {}", self.holder)?;
        writeln!(f)?;

        if self.entries.is_empty() {
            writeln!(f, "No transactions.")?;
        } else {
            writeln!(f, "TRANSACTIONS:")?;
            for entry in &self.entries {
                writeln!(
                    f,
                    "  {}. {} - $ {} - {}",
                    entry.index,
                    entry.kind,
                    entry.amount,
                    entry.timestamp.with_timezone(&self.utc_offset).format(TIMESTAMP_FORMAT)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Total deposits: $ {}", self.total_deposited)?;
        writeln!(f, "Total withdrawals: $ {}", self.total_withdrawn)?;
        writeln!(f, "BALANCE: $ {}", self.balance)?;
        if let Some(limits) = &self.limits {
            writeln!(
                f,
                "Withdrawals today: {}/{}",
                limits.withdrawals_today, limits.max_withdrawals_per_day
            )?;
            writeln!(f, "Limit per withdrawal: $ {}", limits.max_per_withdrawal)?;
        }
        write!(f, "{heavy}")
    }
}

/// one line of the client listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub name: String,
    pub tax_id: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub account_count: usize,
}

impl ClientSummary {
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name().to_string(),
            tax_id: client.tax_id().to_string(),
            birth_date: client.birth_date(),
            address: client.address().to_string(),
            account_count: client.accounts().len(),
        }
    }
}

impl fmt::Display for ClientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "CPF: {}", self.tax_id)?;
        writeln!(f, "Birth date: {}", self.birth_date.format(BIRTH_DATE_FORMAT))?;
        writeln!(f, "Address: {}", self.address)?;
        write!(f, "Accounts: {}", self.account_count)
    }
}

/// one line of the account listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
    pub tax_id: String,
    pub balance: Money,
    pub kind: AccountKind,
}

impl AccountSummary {
    pub fn from_account(account: &Account, holder: &Client) -> Self {
        Self {
            branch: account.branch().to_string(),
            number: account.number(),
            holder: holder.name().to_string(),
            tax_id: holder.tax_id().to_string(),
            balance: account.balance(),
            kind: account.kind(),
        }
    }
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch: {} | Account: {}", self.branch, self.number)?;
        writeln!(f, "Holder: {} (CPF: {})", self.holder, self.tax_id)?;
        writeln!(f, "Balance: $ {}", self.balance)?;
        write!(f, "Type: {}", self.kind)
    }
}

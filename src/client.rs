use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BankError, Result};
use crate::types::{AccountNumber, TaxId};

/// birth date format accepted on registration
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// individual bank client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(
        tax_id: TaxId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tax_id,
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// parse a `DD/MM/YYYY` birth date
    pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT).map_err(|_| {
            BankError::InvalidBirthDate {
                input: input.to_string(),
            }
        })
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// numbers of the accounts this client holds, in opening order
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (CPF: {})", self.name, self.tax_id)
    }
}

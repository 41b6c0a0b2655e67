use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{utc_offset, AccountConfig, WithdrawalLimits};
use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::transaction::History;
use crate::types::{AccountKind, AccountNumber, TaxId};

/// bank account holding a balance and its withdrawal counters
///
/// The balance never goes negative. When the account carries
/// [`WithdrawalLimits`], the daily withdrawal counter is reset lazily by the
/// first withdrawal of a new calendar day, counted in the account's
/// `utc_offset` (UTC unless set with [`Account::with_utc_offset`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    owner: TaxId,
    config: AccountConfig,
    balance: Money,
    withdrawals_today: u32,
    last_reset: NaiveDate,
    #[serde(with = "utc_offset", default = "utc_offset::utc")]
    utc_offset: FixedOffset,
    opened_at: DateTime<Utc>,
    history: History,
}

impl Account {
    /// open an empty account
    pub fn open(
        number: AccountNumber,
        branch: impl Into<String>,
        owner: TaxId,
        config: AccountConfig,
        time_provider: &SafeTimeProvider,
    ) -> Result<Self> {
        config.validate()?;
        let now = time_provider.now();

        Ok(Self {
            number,
            branch: branch.into(),
            owner,
            config,
            balance: Money::ZERO,
            withdrawals_today: 0,
            last_reset: now.date_naive(),
            utc_offset: utc_offset::utc(),
            opened_at: now,
            history: History::new(),
        })
    }

    /// count calendar days in `offset` instead of UTC
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self.last_reset = self.local_date(self.opened_at);
        self
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.config.kind
    }

    pub fn limits(&self) -> Option<&WithdrawalLimits> {
        self.config.limits.as_ref()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// calendar date of `at` as seen by this account
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.utc_offset).date_naive()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// withdrawals counted against the day of `now`, zero once the day has rolled over
    pub fn withdrawals_today(&self, now: DateTime<Utc>) -> u32 {
        if self.local_date(now) > self.last_reset {
            0
        } else {
            self.withdrawals_today
        }
    }

    /// withdrawals still allowed on the day of `now`, `None` when the account is unlimited
    pub fn remaining_withdrawals(&self, now: DateTime<Utc>) -> Option<u32> {
        self.config
            .limits
            .map(|limits| limits.per_day.saturating_sub(self.withdrawals_today(now)))
    }

    /// credit the account, returns the new balance
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// debit the account, returns the new balance
    ///
    /// Rules are checked in a fixed order and the first one violated is
    /// reported: daily count, per-withdrawal cap, positive amount, funds.
    pub fn withdraw(&mut self, amount: Money, time_provider: &SafeTimeProvider) -> Result<Money> {
        self.roll_over_day(self.local_date(time_provider.now()));

        if let Some(limits) = self.config.limits {
            if self.withdrawals_today >= limits.per_day {
                return Err(BankError::DailyLimitExceeded {
                    limit: limits.per_day,
                });
            }

            if amount > limits.per_withdrawal {
                return Err(BankError::PerWithdrawalLimitExceeded {
                    limit: limits.per_withdrawal,
                    requested: amount,
                });
            }
        }

        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }

        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.withdrawals_today += 1;
        Ok(self.balance)
    }

    fn roll_over_day(&mut self, today: NaiveDate) {
        if today > self.last_reset {
            debug!(
                account = self.number,
                previous = %self.last_reset,
                %today,
                "resetting daily withdrawal count"
            );
            self.withdrawals_today = 0;
            self.last_reset = today;
        }
    }
}

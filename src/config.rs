use chrono::FixedOffset;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::types::{AccountKind, DEFAULT_BRANCH};

/// withdrawal rules of a current account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalLimits {
    /// largest amount a single withdrawal may take
    pub per_withdrawal: Money,
    /// withdrawals allowed per calendar day
    pub per_day: u32,
}

impl WithdrawalLimits {
    pub fn new(per_withdrawal: Money, per_day: u32) -> Self {
        Self {
            per_withdrawal,
            per_day,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.per_withdrawal.is_positive() {
            return Err(BankError::InvalidConfiguration {
                message: format!("per-withdrawal limit must be positive, got {}", self.per_withdrawal),
            });
        }
        if self.per_day == 0 {
            return Err(BankError::InvalidConfiguration {
                message: "at least one withdrawal per day must be allowed".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: Money::from_decimal(dec!(500.00)),
            per_day: 3,
        }
    }
}

/// account configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub kind: AccountKind,
    #[serde(default)]
    pub limits: Option<WithdrawalLimits>,
}

impl AccountConfig {
    /// current account: 500.00 per withdrawal, 3 withdrawals a day
    pub fn current() -> Self {
        Self {
            kind: AccountKind::Current,
            limits: Some(WithdrawalLimits::default()),
        }
    }

    /// current account with custom limits
    pub fn current_with(limits: WithdrawalLimits) -> Self {
        Self {
            kind: AccountKind::Current,
            limits: Some(limits),
        }
    }

    /// account without withdrawal limits
    pub fn plain() -> Self {
        Self {
            kind: AccountKind::Plain,
            limits: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match (self.kind, &self.limits) {
            (AccountKind::Current, None) => Err(BankError::InvalidConfiguration {
                message: "current account requires withdrawal limits".to_string(),
            }),
            (AccountKind::Plain, Some(_)) => Err(BankError::InvalidConfiguration {
                message: "plain account cannot carry withdrawal limits".to_string(),
            }),
            (AccountKind::Current, Some(limits)) => limits.validate(),
            (AccountKind::Plain, None) => Ok(()),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self::current()
    }
}

/// bank-wide defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub default_account: AccountConfig,
    /// offset used to decide when a calendar day starts, e.g. `"-03:00"`
    #[serde(with = "utc_offset", default = "utc_offset::utc")]
    pub utc_offset: FixedOffset,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

impl BankConfig {
    /// load configuration from a json document, missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BankConfig = serde_json::from_str(json).map_err(|e| {
            BankError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty() {
            return Err(BankError::InvalidConfiguration {
                message: "branch code must not be empty".to_string(),
            });
        }
        self.default_account.validate()
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            default_account: AccountConfig::current(),
            utc_offset: utc_offset::utc(),
        }
    }
}

/// serde support for [`FixedOffset`] as a `"+HH:MM"` string
pub(crate) mod utc_offset {
    use chrono::{FixedOffset, Offset, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn utc() -> FixedOffset {
        Utc.fix()
    }

    pub fn serialize<S: Serializer>(offset: &FixedOffset, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&offset.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FixedOffset, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<FixedOffset>()
            .map_err(|e| de::Error::custom(format!("invalid utc offset {:?}: {}", s, e)))
    }
}

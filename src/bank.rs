use std::collections::BTreeMap;

use hourglass_rs::SafeTimeProvider;
use tracing::{info, warn};

use crate::account::Account;
use crate::client::Client;
use crate::config::{AccountConfig, BankConfig};
use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::statement::{AccountSummary, ClientSummary, Statement};
use crate::transaction::{Transaction, TransactionRecord};
use crate::types::{AccountNumber, TaxId};

/// registry owning every client and account of one bank
#[derive(Debug)]
pub struct Bank {
    config: BankConfig,
    clients: Vec<Client>,
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
}

impl Bank {
    pub fn new(config: BankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clients: Vec::new(),
            accounts: BTreeMap::new(),
            next_account_number: 1,
        })
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// register a client, `birth_date` as `DD/MM/YYYY`
    pub fn register_client(
        &mut self,
        tax_id: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<&Client> {
        let tax_id = TaxId::parse(tax_id)?;
        if self.clients.iter().any(|c| c.tax_id() == &tax_id) {
            return Err(BankError::ClientAlreadyExists {
                tax_id: tax_id.to_string(),
            });
        }

        let birth_date = Client::parse_birth_date(birth_date)?;
        let client = Client::new(tax_id, name.trim(), birth_date, address.trim());
        info!(tax_id = %client.tax_id(), name = client.name(), "client registered");

        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// open an account with the bank's default configuration
    pub fn open_account(
        &mut self,
        tax_id: &str,
        time_provider: &SafeTimeProvider,
    ) -> Result<AccountNumber> {
        let config = self.config.default_account.clone();
        self.open_account_with(tax_id, config, time_provider)
    }

    pub fn open_account_with(
        &mut self,
        tax_id: &str,
        config: AccountConfig,
        time_provider: &SafeTimeProvider,
    ) -> Result<AccountNumber> {
        let tax_id = TaxId::parse(tax_id)?;
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.tax_id() == &tax_id)
            .ok_or_else(|| BankError::ClientNotFound {
                tax_id: tax_id.to_string(),
            })?;

        let number = self.next_account_number;
        let account = Account::open(
            number,
            self.config.branch.clone(),
            tax_id,
            config,
            time_provider,
        )?
        .with_utc_offset(self.config.utc_offset);

        client.add_account(number);
        info!(account = number, holder = client.name(), kind = %account.kind(), "account opened");

        self.accounts.insert(number, account);
        self.next_account_number += 1;
        Ok(number)
    }

    /// look up a client, punctuation in `tax_id` is ignored
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        let tax_id = TaxId::parse(tax_id).ok()?;
        self.clients.iter().find(|c| c.tax_id() == &tax_id)
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// clients in registration order
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// accounts in number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<TransactionRecord> {
        self.execute(number, Transaction::Deposit(amount), time_provider)
    }

    /// deposit with system time
    pub fn deposit_now(&mut self, number: AccountNumber, amount: Money) -> Result<TransactionRecord> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.deposit(number, amount, &time)
    }

    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<TransactionRecord> {
        self.execute(number, Transaction::Withdrawal(amount), time_provider)
    }

    /// withdraw with system time
    pub fn withdraw_now(&mut self, number: AccountNumber, amount: Money) -> Result<TransactionRecord> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.withdraw(number, amount, &time)
    }

    fn execute(
        &mut self,
        number: AccountNumber,
        transaction: Transaction,
        time_provider: &SafeTimeProvider,
    ) -> Result<TransactionRecord> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound { number })?;

        match transaction.register(account, time_provider) {
            Ok(record) => {
                info!(
                    account = number,
                    kind = %record.kind,
                    amount = %record.amount,
                    balance = %record.balance_after,
                    "transaction accepted"
                );
                Ok(record)
            }
            Err(e) => {
                warn!(
                    account = number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    error = %e,
                    "transaction rejected"
                );
                Err(e)
            }
        }
    }

    /// statement of an account as of the provider's current date
    pub fn statement(
        &self,
        number: AccountNumber,
        time_provider: &SafeTimeProvider,
    ) -> Result<Statement> {
        let account = self
            .find_account(number)
            .ok_or(BankError::AccountNotFound { number })?;
        let holder = self.holder_of(account)?;
        Ok(Statement::build(account, holder, time_provider.now()))
    }

    pub fn client_summaries(&self) -> Vec<ClientSummary> {
        self.clients.iter().map(ClientSummary::from_client).collect()
    }

    pub fn account_summaries(&self) -> Result<Vec<AccountSummary>> {
        self.accounts
            .values()
            .map(|account| {
                let holder = self.holder_of(account)?;
                Ok(AccountSummary::from_account(account, holder))
            })
            .collect()
    }

    fn holder_of(&self, account: &Account) -> Result<&Client> {
        self.clients
            .iter()
            .find(|c| c.tax_id() == account.owner())
            .ok_or_else(|| BankError::ClientNotFound {
                tax_id: account.owner().to_string(),
            })
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            config: BankConfig::default(),
            clients: Vec::new(),
            accounts: BTreeMap::new(),
            next_account_number: 1,
        }
    }
}

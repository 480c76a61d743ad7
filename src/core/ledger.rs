//! Ledger store module
//!
//! This module provides the `Ledger` struct which owns every account and is
//! the only code allowed to change one.
//!
//! The Ledger is responsible for:
//! - Opening accounts with unique account numbers
//! - Removing accounts
//! - Applying deposits and withdrawals while keeping
//!   `balance == total_credit - total_debit`
//! - Handing out immutable snapshots for querying

use super::config::{LedgerConfig, RemovalPolicy};
use super::snapshot::Snapshot;
use super::traits::LedgerStore;
use crate::types::{Account, AccountNumber, LedgerError, Money, TransactionKind};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Manages all accounts and their balances
///
/// Accounts are keyed by account number, which makes uniqueness structural
/// and gives snapshots a deterministic ascending order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Map of account numbers to accounts
    accounts: BTreeMap<AccountNumber, Account>,

    /// Behaviour switches
    config: LedgerConfig,
}

impl Ledger {
    /// Create a new Ledger with no accounts and the default configuration
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a new Ledger with no accounts
    pub fn with_config(config: LedgerConfig) -> Self {
        Ledger {
            accounts: BTreeMap::new(),
            config,
        }
    }

    /// The configuration this ledger was built with
    pub fn config(&self) -> LedgerConfig {
        self.config
    }

    /// Open a new account
    ///
    /// The opening balance is `opening_credit - opening_debit` and may be
    /// negative.
    ///
    /// # Arguments
    ///
    /// * `account_number` - Number for the new account, chosen by the teller
    /// * `holder_name` - Account holder's name
    /// * `opening_debit` - Amount withdrawn at opening
    /// * `opening_credit` - Amount deposited at opening
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The new account
    /// * `Err(LedgerError)` - If validation failed or the number is taken
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `Validation` if the holder name is blank or either opening amount is negative
    /// - `DuplicateAccount` if the account number already exists
    pub fn create(
        &mut self,
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Result<Account, LedgerError> {
        let holder_name = holder_name.into();

        if holder_name.trim().is_empty() {
            return Err(LedgerError::validation("holder_name", "must not be blank"));
        }
        if opening_debit < 0 {
            return Err(LedgerError::validation(
                "opening_debit",
                format!("{} is negative", opening_debit),
            ));
        }
        if opening_credit < 0 {
            return Err(LedgerError::validation(
                "opening_credit",
                format!("{} is negative", opening_credit),
            ));
        }

        match self.accounts.entry(account_number) {
            Entry::Occupied(_) => Err(LedgerError::duplicate_account(account_number)),
            Entry::Vacant(slot) => {
                let account = slot
                    .insert(Account::open(
                        account_number,
                        holder_name,
                        opening_debit,
                        opening_credit,
                    ))
                    .clone();
                debug!(
                    account = account_number,
                    balance = account.balance,
                    "account created"
                );
                Ok(account)
            }
        }
    }

    /// Remove an account
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Account))` - The removed account
    /// * `Ok(None)` - No account matched and the removal policy is lenient
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account matched and the removal policy
    /// is strict.
    pub fn remove(&mut self, account_number: AccountNumber) -> Result<Option<Account>, LedgerError> {
        match self.accounts.remove(&account_number) {
            Some(account) => {
                debug!(account = account_number, "account removed");
                Ok(Some(account))
            }
            None => match self.config.removal {
                RemovalPolicy::Lenient => {
                    debug!(account = account_number, "remove matched no account");
                    Ok(None)
                }
                RemovalPolicy::Strict => Err(LedgerError::account_not_found(account_number)),
            },
        }
    }

    /// Apply a deposit or withdrawal
    ///
    /// Deposits add the amount to `total_credit` and `balance`; withdrawals
    /// add it to `total_debit` and subtract it from `balance`. Both totals and
    /// the balance are computed with checked arithmetic before anything is
    /// written, so a rejected transaction leaves the account untouched.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to update
    /// * `amount` - Positive whole amount
    /// * `kind` - Deposit or withdraw
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The account after the transaction
    /// * `Err(LedgerError)` - If the transaction was rejected
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `AccountNotFound` if no account has this number
    /// - `InsufficientFunds` if withdrawing more than the balance
    /// - `ArithmeticOverflow` if a running total would overflow
    pub fn transact(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Account, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        let account = self
            .accounts
            .get_mut(&account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        match kind {
            TransactionKind::Deposit => {
                let new_credit = account
                    .total_credit
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_number))?;

                let new_balance = account
                    .balance
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_number))?;

                account.total_credit = new_credit;
                account.balance = new_balance;
            }
            TransactionKind::Withdraw => {
                if amount > account.balance {
                    return Err(LedgerError::insufficient_funds(
                        account_number,
                        account.balance,
                        amount,
                    ));
                }

                let new_debit = account
                    .total_debit
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", account_number))?;

                let new_balance = account
                    .balance
                    .checked_sub(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", account_number))?;

                account.total_debit = new_debit;
                account.balance = new_balance;
            }
        }

        debug_assert!(account.is_balanced());
        debug!(
            account = account_number,
            kind = %kind,
            amount,
            balance = account.balance,
            "transaction applied"
        );

        Ok(account.clone())
    }

    /// Deposit `amount` into an account
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
    ) -> Result<Account, LedgerError> {
        self.transact(account_number, amount, TransactionKind::Deposit)
    }

    /// Withdraw `amount` from an account
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
    ) -> Result<Account, LedgerError> {
        self.transact(account_number, amount, TransactionKind::Withdraw)
    }

    /// Look up an account
    pub fn get(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    /// Whether an account with this number exists
    pub fn contains(&self, account_number: AccountNumber) -> bool {
        self.accounts.contains_key(&account_number)
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate over accounts in ascending account number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Copy all accounts, in ascending account number order, into a snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.accounts.values().cloned().collect())
    }
}

impl LedgerStore for Ledger {
    fn create(
        &mut self,
        account_number: AccountNumber,
        holder_name: String,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Result<Account, LedgerError> {
        Ledger::create(self, account_number, holder_name, opening_debit, opening_credit)
    }

    fn remove(&mut self, account_number: AccountNumber) -> Result<Option<Account>, LedgerError> {
        Ledger::remove(self, account_number)
    }

    fn transact(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Account, LedgerError> {
        Ledger::transact(self, account_number, amount, kind)
    }

    fn snapshot(&self) -> Snapshot {
        Ledger::snapshot(self)
    }
}

//! Teller commands and the text-to-value parse boundary
//!
//! Tellers type account numbers, names and amounts as text. Everything that
//! turns that text into typed values lives here, so that a malformed field is
//! rejected with a [`LedgerError`] instead of silently becoming zero.

use super::account::{Account, AccountNumber, Money};
use super::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a balance-affecting transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to an account
    ///
    /// Increases `total_credit` and `balance` by the amount.
    Deposit,

    /// Debit funds from an account
    ///
    /// Increases `total_debit` and decreases `balance` by the amount.
    /// Requires `amount <= balance`.
    #[serde(alias = "withdrawal")]
    Withdraw,
}

impl TransactionKind {
    /// Lowercase name used in logs and CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdraw" | "withdrawal" => Ok(TransactionKind::Withdraw),
            _ => Err(LedgerError::invalid_command(s.trim())),
        }
    }
}

/// A single teller request against the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new account
    Create {
        account_number: AccountNumber,
        holder_name: String,
        opening_debit: Money,
        opening_credit: Money,
    },

    /// Close and delete an account
    Remove { account_number: AccountNumber },

    /// Deposit into or withdraw from an account
    Transact {
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    },
}

impl Command {
    /// The account this command targets
    pub fn account_number(&self) -> AccountNumber {
        match self {
            Command::Create { account_number, .. }
            | Command::Remove { account_number }
            | Command::Transact { account_number, .. } => *account_number,
        }
    }

    /// Short name of the command, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Remove { .. } => "remove",
            Command::Transact { kind, .. } => kind.as_str(),
        }
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The newly opened account
    Created(Account),

    /// The removed account, or `None` when nothing matched
    Removed(Option<Account>),

    /// The account after the transaction
    Transacted(Account),
}

/// Parse a required account number field
///
/// # Errors
///
/// Returns a `Validation` error if the field is blank or not a non-negative
/// whole number.
pub fn parse_account_number(raw: &str) -> Result<AccountNumber, LedgerError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(LedgerError::validation("account", "is required"));
    }

    value.parse::<AccountNumber>().map_err(|_| {
        LedgerError::validation("account", format!("'{}' is not an account number", value))
    })
}

/// Parse a required whole-number money field such as an opening debit
///
/// Range checks belong to the ledger; this only rejects text that is not a
/// number at all.
///
/// # Errors
///
/// Returns a `Validation` error naming `field` if the value is blank or not a
/// whole number.
pub fn parse_money(field: &str, raw: &str) -> Result<Money, LedgerError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(LedgerError::validation(field, "is required"));
    }

    value
        .parse::<Money>()
        .map_err(|_| LedgerError::validation(field, format!("'{}' is not a whole number", value)))
}

/// Parse a transaction amount
///
/// Non-positive values parse successfully and are rejected by the ledger.
///
/// # Errors
///
/// Returns `InvalidAmount` if the value is blank or not a whole number.
pub fn parse_amount(raw: &str) -> Result<Money, LedgerError> {
    let value = raw.trim();
    value
        .parse::<Money>()
        .map_err(|_| LedgerError::invalid_amount(value))
}

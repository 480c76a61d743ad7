//! Account-related types for the teller ledger
//!
//! This module defines the Account structure and the identifier and money
//! aliases used throughout the ledger.

use serde::Serialize;

/// Account identifier
///
/// Assigned by the teller at creation time, never generated by the ledger.
pub type AccountNumber = u64;

/// Whole currency units
///
/// Signed so that a malformed negative amount can reach the ledger and be
/// rejected with a typed error rather than wrapping.
pub type Money = i64;

/// A single bank account
///
/// The ledger is the only writer of these fields. `balance` is kept equal to
/// `total_credit - total_debit` by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Unique account number
    pub account_number: AccountNumber,

    /// Name of the account holder (never blank)
    pub holder_name: String,

    /// Cumulative withdrawals, including the opening debit
    pub total_debit: Money,

    /// Cumulative deposits, including the opening credit
    pub total_credit: Money,

    /// Current balance
    ///
    /// May be negative when the opening debit exceeds the opening credit.
    pub balance: Money,
}

impl Account {
    /// Open an account with the given opening debit and credit
    ///
    /// The caller is responsible for validating the inputs; see
    /// [`Ledger::create`](crate::core::Ledger::create).
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account number for this account
    /// * `holder_name` - The account holder's name
    /// * `opening_debit` - Amount withdrawn at opening (non-negative)
    /// * `opening_credit` - Amount deposited at opening (non-negative)
    ///
    /// # Returns
    ///
    /// A new Account with `balance = opening_credit - opening_debit`
    pub fn open(
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Self {
        Account {
            account_number,
            holder_name: holder_name.into(),
            total_debit: opening_debit,
            total_credit: opening_credit,
            // Both operands are non-negative, so the difference cannot overflow
            balance: opening_credit - opening_debit,
        }
    }

    /// Whether the balance agrees with the debit and credit totals
    pub fn is_balanced(&self) -> bool {
        self.total_credit
            .checked_sub(self.total_debit)
            .is_some_and(|expected| expected == self.balance)
    }
}

//! Core trait for ledger stores
//!
//! This module defines the trait abstraction that lets the single-threaded
//! [`Ledger`](crate::core::Ledger) and the lock-protected
//! [`SharedLedger`](crate::core::SharedLedger) be driven interchangeably.

use super::snapshot::Snapshot;
use crate::types::{
    Account, AccountNumber, Command, LedgerError, Money, Outcome, TransactionKind,
};

/// Trait for the authoritative account store
///
/// Every method is atomic: it either commits in full or returns an error and
/// leaves the store as it was.
pub trait LedgerStore {
    /// Open a new account
    fn create(
        &mut self,
        account_number: AccountNumber,
        holder_name: String,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Result<Account, LedgerError>;

    /// Delete an account, returning it if it existed
    fn remove(&mut self, account_number: AccountNumber) -> Result<Option<Account>, LedgerError>;

    /// Apply a deposit or withdrawal and return the updated account
    fn transact(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Account, LedgerError>;

    /// Copy the current accounts out for querying
    fn snapshot(&self) -> Snapshot;

    /// Route a parsed teller command to the matching operation
    fn apply(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        match command {
            Command::Create {
                account_number,
                holder_name,
                opening_debit,
                opening_credit,
            } => self
                .create(account_number, holder_name, opening_debit, opening_credit)
                .map(Outcome::Created),
            Command::Remove { account_number } => {
                self.remove(account_number).map(Outcome::Removed)
            }
            Command::Transact {
                account_number,
                amount,
                kind,
            } => self
                .transact(account_number, amount, kind)
                .map(Outcome::Transacted),
        }
    }
}

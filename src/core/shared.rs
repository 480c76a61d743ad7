//! Thread-safe ledger handle
//!
//! This module provides `SharedLedger`, a cloneable handle that lets many
//! threads or async tasks drive one [`Ledger`].
//!
//! # Design
//!
//! All mutations go through a single writer lock, so the check and the update
//! of a withdrawal happen under the same guard and two concurrent withdrawals
//! can never both pass the balance check. Reads copy a [`Snapshot`] out under
//! a short read lock; queries then run on the copy without holding any lock.
//!
//! # Poisoning
//!
//! Ledger operations validate before they write, so a panic while the lock is
//! held cannot leave an account half-updated. A poisoned lock is therefore
//! recovered rather than propagated.

use super::config::LedgerConfig;
use super::ledger::Ledger;
use super::snapshot::Snapshot;
use super::traits::LedgerStore;
use crate::types::{Account, AccountNumber, Command, LedgerError, Money, Outcome, TransactionKind};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable, lock-protected ledger
///
/// Clones share the same underlying ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    /// The single ledger all handles write to
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Create a handle to a new, empty ledger
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Create a handle to a new, empty ledger with the given configuration
    pub fn with_config(config: LedgerConfig) -> Self {
        Self::from_ledger(Ledger::with_config(config))
    }

    /// Wrap an existing ledger
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a new account; see [`Ledger::create`]
    pub fn create(
        &self,
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Result<Account, LedgerError> {
        self.write()
            .create(account_number, holder_name, opening_debit, opening_credit)
    }

    /// Remove an account; see [`Ledger::remove`]
    pub fn remove(&self, account_number: AccountNumber) -> Result<Option<Account>, LedgerError> {
        self.write().remove(account_number)
    }

    /// Apply a deposit or withdrawal; see [`Ledger::transact`]
    ///
    /// The balance check and the update happen under one write lock.
    pub fn transact(
        &self,
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Account, LedgerError> {
        self.write().transact(account_number, amount, kind)
    }

    /// Apply a parsed teller command under one write lock
    pub fn apply(&self, command: Command) -> Result<Outcome, LedgerError> {
        LedgerStore::apply(&mut *self.write(), command)
    }

    /// Copy of one account, if it exists
    pub fn get(&self, account_number: AccountNumber) -> Option<Account> {
        self.read().get(account_number).cloned()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy the current accounts out for querying
    pub fn snapshot(&self) -> Snapshot {
        self.read().snapshot()
    }
}

impl LedgerStore for SharedLedger {
    fn create(
        &mut self,
        account_number: AccountNumber,
        holder_name: String,
        opening_debit: Money,
        opening_credit: Money,
    ) -> Result<Account, LedgerError> {
        SharedLedger::create(self, account_number, holder_name, opening_debit, opening_credit)
    }

    fn remove(&mut self, account_number: AccountNumber) -> Result<Option<Account>, LedgerError> {
        SharedLedger::remove(self, account_number)
    }

    fn transact(
        &mut self,
        account_number: AccountNumber,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Account, LedgerError> {
        SharedLedger::transact(self, account_number, amount, kind)
    }

    fn snapshot(&self) -> Snapshot {
        SharedLedger::snapshot(self)
    }

    fn apply(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        SharedLedger::apply(self, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_the_same_ledger() {
        let ledger = SharedLedger::new();
        let clone = ledger.clone();

        clone.create(1, "A", 0, 100).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(1).unwrap().balance, 100);
    }

    #[test]
    fn test_with_config_applies_removal_policy() {
        let ledger = SharedLedger::with_config(LedgerConfig::strict());

        assert_eq!(ledger.remove(7), Err(LedgerError::account_not_found(7)));
    }

    #[test]
    fn test_apply_through_generic_store() {
        fn run<S: LedgerStore>(store: &mut S) -> Result<Outcome, LedgerError> {
            store.apply(Command::Create {
                account_number: 9,
                holder_name: "Generic".to_string(),
                opening_debit: 0,
                opening_credit: 5,
            })
        }

        let mut ledger = SharedLedger::new();
        assert!(run(&mut ledger).is_ok());
        assert_eq!(ledger.snapshot().len(), 1);
    }

    #[test]
    fn test_concurrent_deposits_same_account() {
        let ledger = SharedLedger::new();
        ledger.create(1, "A", 0, 0).unwrap();
        let mut handles = vec![];

        // Spawn 100 threads, all depositing 100 into the same account
        for _ in 0..100 {
            let ledger = ledger.clone();
            handles.push(thread::spawn(move || {
                ledger.transact(1, 100, TransactionKind::Deposit).unwrap();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let account = ledger.get(1).unwrap();
        assert_eq!(account.balance, 10_000);
        assert_eq!(account.total_credit, 10_000);
        assert!(account.is_balanced());
    }

    #[test]
    fn test_concurrent_withdrawals_never_overdraw() {
        let ledger = SharedLedger::new();
        ledger.create(1, "A", 0, 100).unwrap();
        let mut handles = vec![];

        // 50 threads race to withdraw 10 from a balance of 100
        for _ in 0..50 {
            let ledger = ledger.clone();
            handles.push(thread::spawn(move || {
                ledger.transact(1, 10, TransactionKind::Withdraw).is_ok()
            }));
        }

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        let account = ledger.get(1).unwrap();
        assert_eq!(successes, 10);
        assert_eq!(account.balance, 0);
        assert_eq!(account.total_debit, 100);
    }

    #[test]
    fn test_concurrent_creates_same_number_only_one_wins() {
        let ledger = SharedLedger::new();
        let mut handles = vec![];

        for i in 0..20 {
            let ledger = ledger.clone();
            handles.push(thread::spawn(move || {
                ledger.create(1001, format!("Teller {}", i), 0, 0).is_ok()
            }));
        }

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_writes() {
        let ledger = SharedLedger::new();
        ledger.create(1, "A", 0, 10).unwrap();

        let snapshot = ledger.snapshot();
        let writer = {
            let ledger = ledger.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    ledger.transact(1, 1, TransactionKind::Deposit).unwrap();
                }
            })
        };
        writer.join().unwrap();

        assert_eq!(snapshot[0].balance, 10);
        assert_eq!(ledger.get(1).unwrap().balance, 110);
    }
}

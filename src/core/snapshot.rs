//! Frozen copies of the ledger's accounts
//!
//! A [`Snapshot`] is what the query engine works on. It is cheap to clone and
//! share between threads, and it never changes after it is taken, so queries
//! can run while the ledger keeps accepting writes.

use crate::types::Account;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, shareable list of accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    accounts: Arc<[Account]>,
}

impl Snapshot {
    /// Freeze a list of accounts
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::from(accounts),
        }
    }

    /// The accounts, in snapshot order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Snapshot {
    type Target = [Account];

    fn deref(&self) -> &Self::Target {
        &self.accounts
    }
}

impl From<Vec<Account>> for Snapshot {
    fn from(accounts: Vec<Account>) -> Self {
        Self::new(accounts)
    }
}

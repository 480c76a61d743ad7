//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and money types
//! - `command`: Teller commands and the text parse boundary
//! - `query`: Search, sort and view parameters
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod query;

pub use account::{Account, AccountNumber, Money};
pub use command::{Command, Outcome, TransactionKind};
pub use error::LedgerError;
pub use query::{LedgerSummary, SearchCriterion, SortDirection, SortField, SortOrder, ViewMode};

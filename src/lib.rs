//! Teller Ledger Library
//! # Overview
//!
//! This library provides an in-memory bank account ledger for teller
//! operations, a query engine over point-in-time snapshots, and a CSV replay
//! pipeline with both a sync and an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Command, query parameters, errors)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account store and the teller operations
//!   - [`core::shared`] - Lock-protected ledger handle for concurrent writers
//!   - [`core::query`] - Search, sort, view, maximum balance and summary
//!   - [`core::batch_processor`] - Account-partitioned concurrent replay
//! - [`io`] - CSV parsing and output
//! - [`strategy`] - Sync and async replay pipelines
//! - [`report`] - Report selection and rendering
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Teller Operations
//!
//! - **Create**: Open an account with a unique number, a holder name and an
//!   opening debit and credit
//! - **Remove**: Delete an account by number
//! - **Deposit**: Add to an account's credit total and balance
//! - **Withdraw**: Add to an account's debit total and reduce its balance
//!   (rejected if the amount exceeds the balance)
//!
//! # Account State
//!
//! Each account maintains:
//! - `total_debit`: Everything ever taken out, opening debit included
//! - `total_credit`: Everything ever put in, opening credit included
//! - `balance`: Always `total_credit - total_debit`
//!
//! # Example
//!
//! ```
//! use teller_ledger::core::{query, Ledger};
//! use teller_ledger::types::{SortDirection, SortField, ViewMode};
//!
//! let mut ledger = Ledger::new();
//! ledger.create(1001, "John Smith", 500, 2500).unwrap();
//! ledger.create(1002, "Emma Johnson", 300, 4300).unwrap();
//! ledger.withdraw(1002, 1000).unwrap();
//!
//! let snapshot = ledger.snapshot();
//! let sorted = query::sort_by(&snapshot, SortField::Balance, SortDirection::Descending);
//! let top = query::view(&sorted, ViewMode::FirstN(1));
//! assert_eq!(top[0].account_number, 1002);
//! assert_eq!(top[0].balance, 3000);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod report;
pub mod strategy;
pub mod types;

pub use self::core::{Ledger, LedgerConfig, LedgerStore, RemovalPolicy, SharedLedger, Snapshot};
pub use io::write_accounts_csv;
pub use report::{write_report, ReportKind, ReportRequest};
pub use types::{
    Account, AccountNumber, Command, LedgerError, LedgerSummary, Money, SearchCriterion,
    SortDirection, SortField, SortOrder, TransactionKind, ViewMode,
};

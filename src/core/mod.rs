//! Core business logic module
//!
//! This module contains the ledger and the operations that read it:
//! - `traits` - The `LedgerStore` trait shared by both store implementations
//! - `ledger` - Single-threaded account store with the teller operations
//! - `shared` - Lock-protected handle for concurrent writers
//! - `snapshot` - Frozen copies of the accounts handed to queries
//! - `query` - Search, sort, view and summary over snapshots
//! - `batch_processor` - Account-partitioned concurrent command application
//! - `config` - Ledger behaviour settings

pub mod batch_processor;
pub mod config;
pub mod ledger;
pub mod query;
pub mod shared;
pub mod snapshot;
pub mod traits;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use config::{LedgerConfig, RemovalPolicy};
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use snapshot::Snapshot;
pub use traits::LedgerStore;

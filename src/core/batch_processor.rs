//! Batch processing with account-based partitioning
//!
//! This module provides the `BatchProcessor` struct, which applies batches of
//! teller commands to a [`SharedLedger`] concurrently.
//!
//! # Design
//!
//! Every ledger operation touches exactly one account, so commands for
//! different accounts commute. The processor partitions each batch by account
//! number and runs one tokio task per partition; within a partition commands
//! are applied strictly in input order. The final ledger state is therefore
//! the same as applying the batch sequentially.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── SharedLedger  (Arc<RwLock<Ledger>>, shared by every task)
//! ```

use std::collections::HashMap;

use tracing::error;

use super::shared::SharedLedger;
use crate::types::{AccountNumber, Command, LedgerError, Outcome};

/// Result of applying a single command
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The command that was applied
    pub command: Command,

    /// What the ledger did, or why it refused
    pub result: Result<Outcome, LedgerError>,
}

/// Batch processor with account-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Ledger handle shared by every spawned task
    ledger: SharedLedger,
}

impl BatchProcessor {
    /// Create a processor that writes to `ledger`
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// The ledger this processor writes to
    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Partition a batch of commands by account number
    ///
    /// Each command appears in exactly one partition, and commands within a
    /// partition keep their input order.
    pub fn partition_by_account(
        &self,
        batch: Vec<Command>,
    ) -> HashMap<AccountNumber, Vec<Command>> {
        let mut account_batches: HashMap<AccountNumber, Vec<Command>> = HashMap::new();

        for command in batch {
            account_batches
                .entry(command.account_number())
                .or_default()
                .push(command);
        }

        account_batches
    }

    /// Apply all commands for a single account sequentially
    ///
    /// A refused command is recorded in its result and does not stop the
    /// commands after it. Results are in input order.
    pub async fn process_account_commands(&self, commands: Vec<Command>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(commands.len());

        for command in commands {
            let result = self.ledger.apply(command.clone());
            results.push(ProcessingResult { command, result });
        }

        results
    }

    /// Apply a batch of commands with account-based partitioning
    ///
    /// Partitions run concurrently, so results for different accounts may be
    /// interleaved in any order.
    pub async fn process_batch(&self, batch: Vec<Command>) -> Vec<ProcessingResult> {
        let account_batches = self.partition_by_account(batch);

        let mut tasks = Vec::with_capacity(account_batches.len());
        for (_account, commands) in account_batches {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_account_commands(commands).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(account_results) => results.extend(account_results),
                Err(e) => error!(error = ?e, "batch task panicked"),
            }
        }

        results
    }
}

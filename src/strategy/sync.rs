//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates a replay by coordinating between
//! the SyncReader (for CSV input) and a [`Ledger`] (for business rules).
//!
//! Rows are applied one at a time as they are read, so memory usage is
//! O(accounts) rather than O(commands).

use crate::core::{Ledger, LedgerConfig, LedgerStore, Snapshot};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use teller_ledger::core::LedgerConfig;
/// use teller_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
///
/// let strategy = SyncProcessingStrategy::new(LedgerConfig::default());
/// let snapshot = strategy.process(Path::new("commands.csv")).expect("Processing failed");
/// println!("{} accounts", snapshot.len());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    ledger_config: LedgerConfig,
}

impl SyncProcessingStrategy {
    /// Create a strategy whose ledger uses `ledger_config`
    pub fn new(ledger_config: LedgerConfig) -> Self {
        Self { ledger_config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path) -> Result<Snapshot, LedgerError> {
        let mut ledger = Ledger::with_config(self.ledger_config);
        let mut reader = SyncReader::new(input_path)?;
        let mut rejected = 0usize;

        while let Some(result) = reader.next() {
            let line = reader.line();
            let outcome = result.and_then(|command| ledger.apply(command));
            if let Err(e) = outcome {
                rejected += 1;
                warn!(line, error = %e, "command rejected");
            }
        }

        info!(accounts = ledger.len(), rejected, "replay finished");

        Ok(ledger.snapshot())
    }
}

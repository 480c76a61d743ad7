//! Processing strategy module for replaying teller commands
//!
//! This module defines the Strategy pattern for the complete replay pipeline,
//! covering both CSV parsing and ledger updates. This allows different
//! processing implementations (synchronous, asynchronous batch) to be selected
//! at runtime. Both produce the same final snapshot for the same input.

use crate::cli::StrategyType;
use crate::core::{LedgerConfig, Snapshot};
use crate::types::LedgerError;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete replay pipelines
///
/// Each strategy reads teller commands from a CSV file, applies them to a
/// fresh ledger and returns the final state.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay the commands in `input_path` and return the resulting accounts
    ///
    /// Rejected commands and malformed rows are logged and skipped; they never
    /// abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: the input file cannot be
    /// opened, or the async runtime cannot be started.
    fn process(&self, input_path: &Path) -> Result<Snapshot, LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `batch_config` is ignored by the synchronous strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    batch_config: Option<BatchConfig>,
    ledger_config: LedgerConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(ledger_config)),
        StrategyType::Async => Box::new(AsyncProcessingStrategy::new(
            batch_config.unwrap_or_default(),
            ledger_config,
        )),
    }
}

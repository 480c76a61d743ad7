//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. It applies commands in batches using thread-based
//! parallelism with account-based partitioning.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (account partitioning + tokio tasks)
//!         └── SharedLedger (single writer lock)
//! ```
//!
//! Batches are processed one after another, so an account whose commands span
//! several batches still sees them in file order. Within a batch, different
//! accounts run in parallel on the tokio multi-threaded runtime.

use crate::core::{BatchProcessor, LedgerConfig, SharedLedger, Snapshot};
use crate::io::async_reader::AsyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for batch processing
///
/// Controls how commands are batched and the number of worker threads for
/// parallel processing within each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of CSV rows per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid worker count, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,

    /// Configuration for the ledger each run starts with
    ledger_config: LedgerConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig, ledger_config: LedgerConfig) -> Self {
        Self {
            config,
            ledger_config,
        }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path) -> Result<Snapshot, LedgerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let processor = BatchProcessor::new(SharedLedger::with_config(self.ledger_config));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| LedgerError::IoError {
                    message: format!("Failed to open file '{}': {}", input_path.display(), e),
                })?;

            // csv-async reads futures::io, tokio::fs::File implements tokio::io
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);
            let mut rejected = 0usize;

            while !reader.is_finished() {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    continue;
                }

                // Wait for the whole batch before reading the next one
                for result in processor.process_batch(batch).await {
                    if let Err(e) = result.result {
                        rejected += 1;
                        warn!(
                            command = result.command.name(),
                            account = result.command.account_number(),
                            error = %e,
                            "command rejected"
                        );
                    }
                }
            }

            let ledger = processor.ledger();
            info!(accounts = ledger.len(), rejected, "replay finished");

            Ok(ledger.snapshot())
        })
    }
}

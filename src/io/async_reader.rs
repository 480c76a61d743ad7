//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over teller commands from a CSV source.
//! Supports batch reading for efficient async processing.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of Commands
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::Command;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over teller commands.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,

    /// Data rows consumed so far, valid or not
    rows_read: usize,

    finished: bool,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            rows_read: 0,
            finished: false,
        }
    }

    /// Whether the end of the input has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Read a batch of commands
    ///
    /// Reads up to `batch_size` rows from the CSV source, converting them to
    /// commands. Invalid rows are logged and skipped but still count towards
    /// the batch, so a batch may be shorter than `batch_size` without the
    /// input being exhausted; use [`AsyncReader::is_finished`] to detect the end.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Command> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();
        let mut consumed = 0;

        while consumed < batch_size {
            let Some(next) = records.next().await else {
                self.finished = true;
                break;
            };
            consumed += 1;
            // Header is line 1
            let line = self.rows_read + consumed + 1;

            match next {
                Ok(csv_record) => match convert_csv_record(csv_record) {
                    Ok(command) => batch.push(command),
                    Err(e) => warn!(line, error = %e, "skipping invalid record"),
                },
                Err(e) => warn!(line, error = %e, "skipping unparseable row"),
            }
        }

        self.rows_read += consumed;
        batch
    }
}

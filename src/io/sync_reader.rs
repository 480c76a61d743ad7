//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over teller commands from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Command, LedgerError>` for each CSV row:
//!
//! ```no_run
//! use teller_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let mut reader = SyncReader::new(Path::new("commands.csv")).unwrap();
//! while let Some(result) = reader.next() {
//!     match result {
//!         Ok(command) => println!("Applying: {:?}", command),
//!         Err(e) => eprintln!("Line {}: {}", reader.line(), e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - [`SyncReader::line`] reports the file line of the last row yielded
//!
//! Rows are read one at a time; the file is never loaded whole.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{Command, LedgerError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing columns are optional)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file could not be opened.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }

    /// File line of the most recently yielded row; the header is line 1
    pub fn line(&self) -> usize {
        self.line_num
    }
}

impl Iterator for SyncReader {
    type Item = Result<Command, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;

        Some(match next {
            Ok(csv_record) => convert_csv_record(csv_record),
            Err(e) => Err(LedgerError::ParseError {
                line: Some(self.line_num as u64),
                message: e.to_string(),
            }),
        })
    }
}

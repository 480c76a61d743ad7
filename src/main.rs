//! Teller Ledger CLI
//!
//! Replays teller commands from a CSV file into an in-memory account ledger
//! and prints a report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --strategy sync commands.csv
//! cargo run -- --sort-by balance --direction desc --view first:5 commands.csv
//! cargo run -- --search-name smith --report max-balance commands.csv
//! cargo run -- --report summary commands.csv
//! RUST_LOG=debug cargo run -- --strict-remove commands.csv
//! ```
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV parsing with single-threaded processing
//! - **async**: Asynchronous batch processing with multi-threaded parallelism (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output failure)

use std::process;
use teller_ledger::{cli, logging, report, strategy};
use tracing::error;

fn main() {
    logging::init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config, args.to_ledger_config())
    };

    let result = strategy.process(&args.input_file).and_then(|snapshot| {
        let mut output = std::io::stdout().lock();
        report::write_report(&snapshot, &args.to_report_request(), &mut output)
    });

    if let Err(e) = result {
        error!(error = %e, "run failed");
        process::exit(1);
    }
}

//! Benchmark suite for the query engine and the replay strategies
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Ledgers are generated in memory with a deterministic spread of names and
//! balances, so sorts see plenty of ties.

use std::io::Write;
use teller_ledger::cli::StrategyType;
use teller_ledger::core::{query, Ledger, LedgerConfig, Snapshot};
use teller_ledger::strategy::{create_strategy, BatchConfig};
use teller_ledger::types::{SearchCriterion, SortDirection, SortField, ViewMode};
use tempfile::NamedTempFile;

const SIZES: &[u64] = &[100, 1_000, 10_000];

fn main() {
    divan::main();
}

fn snapshot(accounts: u64) -> Snapshot {
    let mut ledger = Ledger::new();
    for n in 0..accounts {
        let credit = ((n * 7919) % 5000) as i64;
        ledger
            .create(n, format!("Holder {}", n % 97), credit / 3, credit)
            .expect("generated account is valid");
    }
    ledger.snapshot()
}

fn commands_csv(accounts: u64) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "type,account,name,debit,credit,amount").expect("write header");
    for n in 0..accounts {
        writeln!(file, "create,{},Holder {},0,1000,", n, n).expect("write row");
    }
    for n in 0..accounts * 4 {
        let kind = if n % 3 == 0 { "withdraw" } else { "deposit" };
        writeln!(file, "{},{},,,,{}", kind, n % accounts, n % 50 + 1).expect("write row");
    }
    file.flush().expect("flush");
    file
}

#[divan::bench(args = SIZES)]
fn sort_by_balance_desc(bencher: divan::Bencher, accounts: u64) {
    let snapshot = snapshot(accounts);
    bencher.bench(|| query::sort_by(&snapshot, SortField::Balance, SortDirection::Descending));
}

#[divan::bench(args = SIZES)]
fn sort_by_name(bencher: divan::Bencher, accounts: u64) {
    let snapshot = snapshot(accounts);
    bencher.bench(|| query::sort_by(&snapshot, SortField::HolderName, SortDirection::Ascending));
}

#[divan::bench(args = SIZES)]
fn search_by_name(bencher: divan::Bencher, accounts: u64) {
    let snapshot = snapshot(accounts);
    let criterion = SearchCriterion::HolderName("LDER 4".to_string());
    bencher.bench(|| query::search(&snapshot, &criterion));
}

#[divan::bench(args = SIZES)]
fn top_and_bottom_by_balance(bencher: divan::Bencher, accounts: u64) {
    let snapshot = snapshot(accounts);
    bencher.bench(|| {
        let sorted = query::sort_by(&snapshot, SortField::Balance, SortDirection::Descending);
        query::view(&sorted, ViewMode::TopAndBottom(2, 2))
    });
}

#[divan::bench(args = SIZES)]
fn max_balance_and_summary(bencher: divan::Bencher, accounts: u64) {
    let snapshot = snapshot(accounts);
    bencher.bench(|| (query::max_balance(&snapshot), query::summarize(&snapshot)));
}

#[divan::bench(args = [StrategyType::Sync, StrategyType::Async])]
fn replay_strategy(bencher: divan::Bencher, strategy_type: StrategyType) {
    let input = commands_csv(1_000);
    let strategy = create_strategy(
        strategy_type,
        Some(BatchConfig::default()),
        LedgerConfig::default(),
    );

    bencher.bench(|| strategy.process(input.path()).expect("Processing failed"));
}

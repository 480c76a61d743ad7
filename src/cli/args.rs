use crate::core::LedgerConfig;
use crate::report::{ReportKind, ReportRequest};
use crate::strategy::BatchConfig;
use crate::types::{SearchCriterion, SortDirection, SortField, SortOrder, ViewMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay teller commands into an account ledger and print a report
#[derive(Parser, Debug)]
#[command(name = "teller-ledger")]
#[command(about = "Replay teller commands into an account ledger and print a report", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing teller commands
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Parsing strategy to use for processing commands
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Parsing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of CSV rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Report removal of unknown accounts as an error
    #[arg(long = "strict-remove")]
    pub strict_remove: bool,

    /// Report to print
    #[arg(long = "report", value_enum, default_value_t = ReportKind::Accounts)]
    pub report: ReportKind,

    /// Field to sort the accounts report by
    #[arg(
        long = "sort-by",
        value_name = "FIELD",
        default_value = "account",
        help = "Sort field: account, name, debit, credit or balance"
    )]
    pub sort_by: SortField,

    /// Sort direction
    #[arg(
        long = "direction",
        value_name = "DIRECTION",
        default_value = "asc",
        help = "Sort direction: asc or desc"
    )]
    pub direction: SortDirection,

    /// Slice of the sorted accounts to print
    #[arg(
        long = "view",
        value_name = "VIEW",
        default_value = "all",
        help = "View: all, first:N or top-bottom:T,B"
    )]
    pub view: ViewMode,

    /// Only accounts with exactly this number
    #[arg(
        long = "search-account",
        value_name = "NUMBER",
        conflicts_with_all = ["search_name", "search"]
    )]
    pub search_account: Option<u64>,

    /// Only accounts whose holder name contains this text (case-insensitive)
    #[arg(long = "search-name", value_name = "TEXT", conflicts_with = "search")]
    pub search_name: Option<String>,

    /// Only accounts whose name or number contains this text
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

/// Available parsing strategies for CSV processing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values take their defaults; zero values fall back to the
    /// defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create a LedgerConfig from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        if self.strict_remove {
            LedgerConfig::strict()
        } else {
            LedgerConfig::default()
        }
    }

    /// Collect the report options
    pub fn to_report_request(&self) -> ReportRequest {
        let search = if let Some(number) = self.search_account {
            Some(SearchCriterion::AccountNumber(number))
        } else if let Some(name) = &self.search_name {
            Some(SearchCriterion::HolderName(name.clone()))
        } else {
            self.search.clone().map(SearchCriterion::Any)
        };

        ReportRequest {
            kind: self.report,
            search,
            order: SortOrder::new(self.sort_by, self.direction),
            view: self.view,
        }
    }
}

//! Report selection and output
//!
//! A [`ReportRequest`] describes what to print from a final snapshot: the
//! account list after search, sort and view, the maximum-balance accounts, or
//! the summary figures.

use crate::core::{query, Snapshot};
use crate::io::csv_format::{write_accounts_csv, write_summary_csv};
use crate::types::{Account, LedgerError, SearchCriterion, SortOrder, ViewMode};
use clap::ValueEnum;
use std::io::Write;

/// Which report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportKind {
    /// Accounts after search, sort and view
    #[default]
    Accounts,
    /// Every account holding the highest balance
    MaxBalance,
    /// Count, total, maximum and average balance
    Summary,
}

/// Everything needed to render a report from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportRequest {
    pub kind: ReportKind,

    /// Optional filter applied before anything else
    pub search: Option<SearchCriterion>,

    /// Ordering for the accounts report
    pub order: SortOrder,

    /// Slice of the sorted accounts to print
    pub view: ViewMode,
}

impl ReportRequest {
    /// Accounts matching the search, or all of them
    fn filtered(&self, accounts: &[Account]) -> Vec<Account> {
        match &self.search {
            Some(criterion) => query::search(accounts, criterion),
            None => accounts.to_vec(),
        }
    }

    /// The rows an account report would print, in order
    ///
    /// For `Summary` this is the filtered set the figures are computed from.
    pub fn select(&self, snapshot: &Snapshot) -> Vec<Account> {
        let filtered = self.filtered(snapshot);
        match self.kind {
            ReportKind::Accounts => {
                let sorted = query::sort_by(&filtered, self.order.field, self.order.direction);
                query::view(&sorted, self.view)
            }
            ReportKind::MaxBalance => query::max_balance(&filtered),
            ReportKind::Summary => filtered,
        }
    }
}

/// Render `request` over `snapshot` as CSV
pub fn write_report(
    snapshot: &Snapshot,
    request: &ReportRequest,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let selected = request.select(snapshot);
    match request.kind {
        ReportKind::Accounts | ReportKind::MaxBalance => write_accounts_csv(&selected, output),
        ReportKind::Summary => write_summary_csv(&query::summarize(&selected), output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SortDirection, SortField};
    use rstest::rstest;

    fn snapshot() -> Snapshot {
        Snapshot::new(vec![
            Account::open(1001, "John Smith", 500, 2500),
            Account::open(1002, "Emma Johnson", 300, 4300),
            Account::open(1003, "Michael Brown", 200, 3200),
            Account::open(1004, "Sophia Williams", 0, 4000),
        ])
    }

    fn numbers(accounts: &[Account]) -> Vec<u64> {
        accounts.iter().map(|a| a.account_number).collect()
    }

    #[test]
    fn test_default_request_lists_all_by_account_number() {
        let selected = ReportRequest::default().select(&snapshot());

        assert_eq!(numbers(&selected), vec![1001, 1002, 1003, 1004]);
    }

    #[rstest]
    #[case::highest_first(SortOrder::highest_balance(), ViewMode::FirstN(2), vec![1002, 1004])]
    #[case::name_a_to_z(SortOrder::name_a_to_z(), ViewMode::All, vec![1002, 1001, 1003, 1004])]
    #[case::top_and_bottom(
        SortOrder::new(SortField::TotalDebit, SortDirection::Ascending),
        ViewMode::TopAndBottom(1, 1),
        vec![1004, 1001]
    )]
    fn test_accounts_report_sorts_then_views(
        #[case] order: SortOrder,
        #[case] view: ViewMode,
        #[case] expected: Vec<u64>,
    ) {
        let request = ReportRequest {
            order,
            view,
            ..ReportRequest::default()
        };

        assert_eq!(numbers(&request.select(&snapshot())), expected);
    }

    #[test]
    fn test_search_applies_before_sort() {
        let request = ReportRequest {
            search: Some(SearchCriterion::HolderName("john".to_string())),
            order: SortOrder::highest_balance(),
            ..ReportRequest::default()
        };

        assert_eq!(numbers(&request.select(&snapshot())), vec![1002, 1001]);
    }

    #[test]
    fn test_max_balance_report_returns_ties() {
        let request = ReportRequest {
            kind: ReportKind::MaxBalance,
            ..ReportRequest::default()
        };

        assert_eq!(numbers(&request.select(&snapshot())), vec![1002, 1004]);
    }

    #[test]
    fn test_write_summary_report() {
        let request = ReportRequest {
            kind: ReportKind::Summary,
            ..ReportRequest::default()
        };
        let mut output = Vec::new();

        write_report(&snapshot(), &request, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "accounts,total_balance,max_balance,average_balance\n4,13000,4000,3250\n"
        );
    }

    #[test]
    fn test_write_max_balance_report_with_no_accounts() {
        let request = ReportRequest {
            kind: ReportKind::MaxBalance,
            ..ReportRequest::default()
        };
        let mut output = Vec::new();

        write_report(&Snapshot::default(), &request, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "account,name,debit,credit,balance\n");
    }
}

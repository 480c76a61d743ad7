//! End-to-end integration tests
//!
//! These tests validate the complete replay pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays all commands into a fresh ledger
//! 3. Renders a report to CSV
//! 4. Compares the output with the expected file
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Duplicate account numbers
//! - Insufficient funds and non-positive amounts
//! - Removal and reuse of account numbers
//! - Malformed rows
//! - Negative opening balances
//!
//! Each test is run twice: once with the synchronous strategy and once with
//! the async strategy.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use teller_ledger::cli::StrategyType;
    use teller_ledger::core::LedgerConfig;
    use teller_ledger::report::{write_report, ReportKind, ReportRequest};
    use teller_ledger::strategy::{create_strategy, BatchConfig};
    use teller_ledger::types::{SearchCriterion, SortOrder, ViewMode};

    /// Replay `fixture_name/input.csv` and compare the report with `expected_file`
    fn run_test_fixture(
        fixture_name: &str,
        expected_file: &str,
        request: &ReportRequest,
        strategy_type: StrategyType,
    ) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/{}", fixture_dir, expected_file);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        // Small batches so the async strategy crosses batch boundaries
        let strategy = create_strategy(
            strategy_type,
            Some(BatchConfig::new(3, 4)),
            LedgerConfig::default(),
        );

        let snapshot = strategy
            .process(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to process commands: {}", e));

        let mut output = Vec::new();
        write_report(&snapshot, request, &mut output)
            .unwrap_or_else(|e| panic!("Failed to write report: {}", e));
        let actual_output = String::from_utf8(output).expect("report is not UTF-8");

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// Final account list for every fixture with both strategies
    #[rstest]
    #[case("happy_path")]
    #[case("duplicate_accounts")]
    #[case("insufficient_funds")]
    #[case("removal")]
    #[case("malformed_data")]
    #[case("negative_opening_balance")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, "expected.csv", &ReportRequest::default(), strategy);
    }

    /// Query reports over the happy path ledger
    #[rstest]
    #[case::highest_balance_first_two(
        "highest_balance_first_two.csv",
        ReportRequest {
            order: SortOrder::highest_balance(),
            view: ViewMode::FirstN(2),
            ..ReportRequest::default()
        }
    )]
    #[case::names_top_and_bottom(
        "names_top_and_bottom.csv",
        ReportRequest {
            order: SortOrder::name_a_to_z(),
            view: ViewMode::TopAndBottom(1, 1),
            ..ReportRequest::default()
        }
    )]
    #[case::search_brown(
        "search_brown.csv",
        ReportRequest {
            search: Some(SearchCriterion::HolderName("BROWN".to_string())),
            ..ReportRequest::default()
        }
    )]
    #[case::max_balance(
        "max_balance.csv",
        ReportRequest { kind: ReportKind::MaxBalance, ..ReportRequest::default() }
    )]
    #[case::summary(
        "summary.csv",
        ReportRequest { kind: ReportKind::Summary, ..ReportRequest::default() }
    )]
    fn test_reports(
        #[case] expected_file: &str,
        #[case] request: ReportRequest,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture("happy_path", expected_file, &request, strategy);
    }

    #[rstest]
    fn test_strict_removal_keeps_same_final_state(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy_type: StrategyType,
    ) {
        let lenient = create_strategy(strategy_type, None, LedgerConfig::default())
            .process(Path::new("tests/fixtures/removal/input.csv"))
            .unwrap();
        let strict = create_strategy(strategy_type, None, LedgerConfig::strict())
            .process(Path::new("tests/fixtures/removal/input.csv"))
            .unwrap();

        assert_eq!(lenient, strict);
    }

    #[rstest]
    fn test_missing_input_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy_type: StrategyType,
    ) {
        let result = create_strategy(strategy_type, None, LedgerConfig::default())
            .process(Path::new("tests/fixtures/does_not_exist/input.csv"));

        assert!(result.is_err());
    }
}

//! Error types for the teller ledger
//!
//! This module defines every error a ledger operation or the command replay
//! surface can report. Errors are returned synchronously to the caller and
//! never leave the ledger partially mutated.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed fields, non-positive amounts, unknown commands
//! - **Ledger Errors**: duplicate accounts, unknown accounts, insufficient funds
//! - **Arithmetic Errors**: overflow in running totals
//! - **I/O Errors**: unreadable files, malformed CSV

use super::account::{AccountNumber, Money};
use thiserror::Error;

/// Main error type for the ledger
///
/// Each variant carries enough context to tell the teller what to correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A required field is missing or malformed
    ///
    /// Raised for blank holder names, negative opening amounts and
    /// unparseable numeric fields.
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// An account with this number already exists
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// The colliding account number
        account: AccountNumber,
    },

    /// No account with this number exists
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// Transaction amount is not a positive whole number
    #[error("Invalid amount '{amount}': must be a positive whole number")]
    InvalidAmount {
        /// The rejected amount as supplied
        amount: String,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account is left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Money,
        /// Requested withdrawal amount
        requested: Money,
    },

    /// A running total would overflow
    ///
    /// The account is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// Unknown command type in a replay file
    #[error("Invalid command type '{command}'")]
    InvalidCommand {
        /// The unrecognised command string
        command: String,
    },

    /// CSV parsing error
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error while reading input or writing a report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a Validation error
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        LedgerError::DuplicateAccount { account }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Money, requested: Money) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str) -> Self {
        LedgerError::InvalidCommand {
            command: command.to_string(),
        }
    }

    /// Whether the error was caused by the teller's input rather than I/O
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            LedgerError::IoError { .. } | LedgerError::ParseError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::validation(
        LedgerError::Validation { field: "holder_name".to_string(), reason: "must not be blank".to_string() },
        "Invalid holder_name: must not be blank"
    )]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { account: 1001 },
        "Account 1001 already exists"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 42 },
        "Account 42 not found"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: "-5".to_string() },
        "Invalid amount '-5': must be a positive whole number"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1001, balance: 50, requested: 100 },
        "Insufficient funds in account 1001: balance 50, requested 100"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1 },
        "Arithmetic overflow in deposit for account 1"
    )]
    #[case::invalid_command(
        LedgerError::InvalidCommand { command: "transfer".to_string() },
        "Invalid command type 'transfer'"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::io_error(
        LedgerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::validation(
        LedgerError::validation("opening_debit", "must not be negative"),
        LedgerError::Validation { field: "opening_debit".to_string(), reason: "must not be negative".to_string() }
    )]
    #[case::duplicate_account(
        LedgerError::duplicate_account(1001),
        LedgerError::DuplicateAccount { account: 1001 }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found(9),
        LedgerError::AccountNotFound { account: 9 }
    )]
    #[case::invalid_amount(
        LedgerError::invalid_amount(0),
        LedgerError::InvalidAmount { amount: "0".to_string() }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(1, 50, 100),
        LedgerError::InsufficientFunds { account: 1, balance: 50, requested: 100 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::validation(LedgerError::validation("account", "empty"), true)]
    #[case::insufficient(LedgerError::insufficient_funds(1, 0, 1), true)]
    #[case::io(LedgerError::IoError { message: "disk".to_string() }, false)]
    #[case::parse(LedgerError::ParseError { line: None, message: "bad".to_string() }, false)]
    fn test_is_rejection(#[case] error: LedgerError, #[case] expected: bool) {
        assert_eq!(error.is_rejection(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}

//! CSV format handling for teller commands and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain commands
//! - Account and summary output serialization
//!
//! All functions are pure (no I/O beyond the supplied writer) for easy testing.

use crate::types::command::{parse_account_number, parse_amount, parse_money};
use crate::types::{Account, Command, LedgerError, LedgerSummary, TransactionKind};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, account, name, debit,
/// credit, amount. Every column after `account` is optional because each
/// command type uses a different subset. All values stay as text until
/// [`convert_csv_record`] parses them.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub command: String,
    pub account: String,
    pub name: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a Command
///
/// Only syntax is checked here: the command type, and that numeric columns
/// hold numbers. Business rules (blank names, negative openings, positive
/// amounts) are enforced by the ledger.
///
/// # Errors
///
/// - `InvalidCommand` for an unknown `type`
/// - `Validation` for a malformed account number, debit or credit
/// - `InvalidAmount` for a missing or non-numeric transaction amount
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Command, LedgerError> {
    let account_number = parse_account_number(&csv_record.account)?;

    match csv_record.command.trim().to_lowercase().as_str() {
        "create" => Ok(Command::Create {
            account_number,
            holder_name: csv_record.name.unwrap_or_default().trim().to_string(),
            opening_debit: parse_money("debit", csv_record.debit.as_deref().unwrap_or(""))?,
            opening_credit: parse_money("credit", csv_record.credit.as_deref().unwrap_or(""))?,
        }),
        "remove" => Ok(Command::Remove { account_number }),
        other => {
            let kind: TransactionKind = other.parse()?;
            let amount = parse_amount(csv_record.amount.as_deref().unwrap_or(""))?;
            Ok(Command::Transact {
                account_number,
                amount,
                kind,
            })
        }
    }
}

/// Write accounts to CSV format
///
/// Writes accounts with columns: account, name, debit, credit, balance.
/// Rows are written in the order given, so callers control sorting.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["account", "name", "debit", "credit", "balance"])?;

    for account in accounts {
        writer.write_record(&[
            account.account_number.to_string(),
            account.holder_name.clone(),
            account.total_debit.to_string(),
            account.total_credit.to_string(),
            account.balance.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write headline figures as a single CSV row
///
/// Maximum and average are left empty when there are no accounts.
pub fn write_summary_csv(summary: &LedgerSummary, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["accounts", "total_balance", "max_balance", "average_balance"])?;
    writer.write_record(&[
        summary.accounts.to_string(),
        summary.total_balance.to_string(),
        summary.max_balance.map(|v| v.to_string()).unwrap_or_default(),
        summary.average_balance.map(|v| v.to_string()).unwrap_or_default(),
    ])?;

    writer.flush()?;

    Ok(())
}

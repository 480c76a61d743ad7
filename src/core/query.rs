//! Query engine
//!
//! Read-only operations over a snapshot of accounts: filtering, sorting,
//! view slicing, maximum-balance lookup and summary figures. Every function
//! takes a borrowed slice and returns new vectors; the input is never
//! modified, and no function here touches the ledger or its lock.
//!
//! The usual pipeline is `search` → `sort_by` → `view`.

use crate::types::{
    Account, LedgerSummary, Money, SearchCriterion, SortDirection, SortField, ViewMode,
};
use std::cmp::Ordering;

/// Accounts matching `criterion`, in input order
pub fn search(accounts: &[Account], criterion: &SearchCriterion) -> Vec<Account> {
    match criterion {
        SearchCriterion::AccountNumber(number) => accounts
            .iter()
            .filter(|account| account.account_number == *number)
            .cloned()
            .collect(),
        SearchCriterion::HolderName(text) => {
            let needle = text.to_lowercase();
            accounts
                .iter()
                .filter(|account| name_contains(account, &needle))
                .cloned()
                .collect()
        }
        SearchCriterion::Any(text) => {
            let needle = text.to_lowercase();
            accounts
                .iter()
                .filter(|account| {
                    name_contains(account, &needle)
                        || account.account_number.to_string().contains(&needle)
                })
                .cloned()
                .collect()
        }
    }
}

/// `needle` must already be lowercase
fn name_contains(account: &Account, needle: &str) -> bool {
    account.holder_name.to_lowercase().contains(needle)
}

/// Compare two accounts on a single field, ascending
pub fn compare_by(field: SortField, a: &Account, b: &Account) -> Ordering {
    match field {
        SortField::AccountNumber => a.account_number.cmp(&b.account_number),
        SortField::HolderName => a.holder_name.cmp(&b.holder_name),
        SortField::TotalDebit => a.total_debit.cmp(&b.total_debit),
        SortField::TotalCredit => a.total_credit.cmp(&b.total_credit),
        SortField::Balance => a.balance.cmp(&b.balance),
    }
}

/// Accounts ordered by `field` in `direction`
///
/// The sort is stable in both directions: accounts with equal keys keep the
/// order they had in `accounts`. Descending flips the comparator, not the
/// result, so ties are not reversed.
pub fn sort_by(accounts: &[Account], field: SortField, direction: SortDirection) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// The part of an already-sorted sequence selected by `mode`
///
/// `TopAndBottom` concatenates the two slices as they are; when they overlap
/// the shared accounts appear twice.
pub fn view(accounts: &[Account], mode: ViewMode) -> Vec<Account> {
    match mode {
        ViewMode::All => accounts.to_vec(),
        ViewMode::FirstN(n) => accounts.iter().take(n).cloned().collect(),
        ViewMode::TopAndBottom(top, bottom) => {
            let top = &accounts[..top.min(accounts.len())];
            let bottom = &accounts[accounts.len().saturating_sub(bottom)..];
            top.iter().chain(bottom).cloned().collect()
        }
    }
}

/// Every account holding the highest balance, in input order
///
/// Returns an empty vector for an empty input.
pub fn max_balance(accounts: &[Account]) -> Vec<Account> {
    let Some(max) = accounts.iter().map(|account| account.balance).max() else {
        return Vec::new();
    };

    accounts
        .iter()
        .filter(|account| account.balance == max)
        .cloned()
        .collect()
}

/// Headline figures: count, total, maximum and average balance
///
/// The average is rounded half up. Maximum and average are `None` for an
/// empty input.
pub fn summarize(accounts: &[Account]) -> LedgerSummary {
    let total: i128 = accounts.iter().map(|account| i128::from(account.balance)).sum();
    let count = accounts.len();

    let average_balance = if count == 0 {
        None
    } else {
        // floor(total / count + 1/2) without leaving integer arithmetic
        let count = count as i128;
        Money::try_from((2 * total + count).div_euclid(2 * count)).ok()
    };

    LedgerSummary {
        accounts: count,
        total_balance: total,
        max_balance: accounts.iter().map(|account| account.balance).max(),
        average_balance,
    }
}

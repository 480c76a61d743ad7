//! Query parameters understood by the query engine
//!
//! These are plain values: a criterion to filter by, a field and direction to
//! sort by, and a view mode that picks which part of the sorted list to show.

use super::account::{AccountNumber, Money};
use std::fmt;
use std::str::FromStr;

/// How to filter a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact match on the account number
    AccountNumber(AccountNumber),

    /// Case-insensitive substring match on the holder name
    HolderName(String),

    /// Holder name substring, or account number digits containing the text
    ///
    /// This is the free-text filter of the accounts table.
    Any(String),
}

/// Account field to order by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    AccountNumber,
    HolderName,
    TotalDebit,
    TotalCredit,
    Balance,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "account" | "account_number" | "acc_no" => Ok(SortField::AccountNumber),
            "name" | "holder_name" => Ok(SortField::HolderName),
            "debit" | "total_debit" => Ok(SortField::TotalDebit),
            "credit" | "total_credit" => Ok(SortField::TotalCredit),
            "balance" => Ok(SortField::Balance),
            other => Err(format!(
                "unknown sort field '{}' (expected account, name, debit, credit or balance)",
                other
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!(
                "unknown sort direction '{}' (expected asc or desc)",
                other
            )),
        }
    }
}

/// A sort field together with its direction
///
/// Mirrors a sortable table header: picking the column already sorted on
/// flips the direction, picking another column starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Holder names A to Z
    pub fn name_a_to_z() -> Self {
        Self::new(SortField::HolderName, SortDirection::Ascending)
    }

    /// Highest balance first
    pub fn highest_balance() -> Self {
        Self::new(SortField::Balance, SortDirection::Descending)
    }

    /// The order after the teller selects `field`
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::new(SortField::AccountNumber, SortDirection::Ascending)
    }
}

/// Which part of a sorted sequence to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Everything
    #[default]
    All,

    /// The first `n` accounts
    FirstN(usize),

    /// The first `top` accounts followed by the last `bottom` accounts
    ///
    /// The two slices are not deduplicated when they overlap.
    TopAndBottom(usize, usize),
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => write!(f, "all"),
            ViewMode::FirstN(n) => write!(f, "first:{}", n),
            ViewMode::TopAndBottom(top, bottom) => write!(f, "top-bottom:{},{}", top, bottom),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    /// Parse `all`, `first:N` or `top-bottom:T,B`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let parse_count = |raw: &str| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a record count", raw.trim()))
        };

        match s.split_once(':') {
            None if s == "all" => Ok(ViewMode::All),
            Some(("first", n)) => Ok(ViewMode::FirstN(parse_count(n)?)),
            Some(("top-bottom", counts)) => {
                let (top, bottom) = counts
                    .split_once(',')
                    .ok_or_else(|| format!("expected top-bottom:T,B, got '{}'", s))?;
                Ok(ViewMode::TopAndBottom(parse_count(top)?, parse_count(bottom)?))
            }
            _ => Err(format!(
                "unknown view '{}' (expected all, first:N or top-bottom:T,B)",
                s
            )),
        }
    }
}

/// Headline figures for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    /// Number of accounts
    pub accounts: usize,

    /// Sum of all balances
    pub total_balance: i128,

    /// Highest balance, `None` for an empty snapshot
    pub max_balance: Option<Money>,

    /// Mean balance rounded half up, `None` for an empty snapshot
    pub average_balance: Option<Money>,
}

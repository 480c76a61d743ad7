//! Ledger behaviour switches

/// What `remove` does when the account number is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Treat the removal as a no-op
    #[default]
    Lenient,

    /// Report `AccountNotFound`
    Strict,
}

/// Configuration for a [`Ledger`](crate::core::Ledger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerConfig {
    /// Handling of removals that match no account
    pub removal: RemovalPolicy,
}

impl LedgerConfig {
    /// Configuration that reports removals of unknown accounts as errors
    pub fn strict() -> Self {
        Self {
            removal: RemovalPolicy::Strict,
        }
    }
}

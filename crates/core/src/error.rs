//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a rejection: the operation that returned it left all state
/// untouched. Nothing here is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A deposit, withdrawal or transfer amount was zero or negative.
    #[error("invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    /// A withdrawal would take the balance below the account's floor.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// No live account carries this id.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    /// Interest accrual was asked for a zero or negative number of months.
    #[error("invalid duration: {0} months (must be positive)")]
    InvalidDuration(Decimal),

    /// The operation only exists for another account variant.
    #[error("{operation} is not applicable to {kind} accounts")]
    NotApplicableForVariant {
        operation: &'static str,
        kind: &'static str,
    },

    /// The ledger has handed out every account id it can.
    #[error("account ids exhausted")]
    IdsExhausted,

    /// Decimal arithmetic left the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// A value failed validation (e.g. malformed snapshot input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_applicable(operation: &'static str, kind: &'static str) -> Self {
        Self::NotApplicableForVariant { operation, kind }
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}

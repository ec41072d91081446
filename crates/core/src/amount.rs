//! Monetary amount helpers.
//!
//! Amounts are `rust_decimal::Decimal` throughout; these helpers centralize the
//! positivity rule and overflow-checked arithmetic so every operation rejects
//! the same inputs the same way.

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Accept strictly positive amounts only.
pub fn ensure_positive(amount: Decimal) -> DomainResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(amount));
    }
    Ok(amount)
}

pub fn checked_add(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_add(rhs).ok_or(DomainError::AmountOverflow)
}

pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(DomainError::AmountOverflow)
}

pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_mul(rhs).ok_or(DomainError::AmountOverflow)
}

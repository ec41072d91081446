use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankbook_core::{DomainError, ValueObject};

/// Account variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Base,
    Savings,
    Checking,
}

impl AccountKind {
    /// Display name of the variant ("Account" for the base variant).
    pub fn type_name(&self) -> &'static str {
        match self {
            AccountKind::Base => "Account",
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Base => "base",
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
        }
    }
}

impl core::str::FromStr for AccountKind {
    type Err = DomainError;

    /// Accepts the lowercase tag or the display name, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" | "account" => Ok(AccountKind::Base),
            "savings" => Ok(AccountKind::Savings),
            "checking" => Ok(AccountKind::Checking),
            _ => Err(DomainError::validation(format!("unknown account kind: {s}"))),
        }
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Variant tag plus the parameters that vary per variant.
///
/// Withdrawal legality dispatches on this instead of on a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccountPolicy {
    Base,
    /// `interest_rate` is annual (0.02 = 2%).
    Savings { interest_rate: Decimal },
    /// `overdraft_limit` is how far below zero the balance may go.
    Checking { overdraft_limit: Decimal },
}

impl ValueObject for AccountPolicy {}

impl AccountPolicy {
    pub fn savings(interest_rate: Decimal) -> Self {
        AccountPolicy::Savings { interest_rate }
    }

    /// Negative limits are clamped to zero.
    pub fn checking(overdraft_limit: Decimal) -> Self {
        AccountPolicy::Checking {
            overdraft_limit: overdraft_limit.max(Decimal::ZERO),
        }
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            AccountPolicy::Base => AccountKind::Base,
            AccountPolicy::Savings { .. } => AccountKind::Savings,
            AccountPolicy::Checking { .. } => AccountKind::Checking,
        }
    }

    /// Lowest balance this variant may hold.
    pub fn floor(&self) -> Decimal {
        match self {
            AccountPolicy::Base | AccountPolicy::Savings { .. } => Decimal::ZERO,
            AccountPolicy::Checking { overdraft_limit } => -*overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        match self {
            AccountPolicy::Checking { overdraft_limit } => *overdraft_limit,
            _ => Decimal::ZERO,
        }
    }

    pub fn interest_rate(&self) -> Option<Decimal> {
        match self {
            AccountPolicy::Savings { interest_rate } => Some(*interest_rate),
            _ => None,
        }
    }

    /// How much could be withdrawn from `balance` right now.
    pub fn available(&self, balance: Decimal) -> Decimal {
        balance.saturating_sub(self.floor()).max(Decimal::ZERO)
    }

    /// Whether withdrawing `amount` from `balance` keeps the balance at or
    /// above the floor.
    pub fn permits_withdrawal(&self, balance: Decimal, amount: Decimal) -> bool {
        match balance.checked_sub(amount) {
            Some(remaining) => remaining >= self.floor(),
            None => false,
        }
    }

    /// Whether `balance` is a legal resting balance for this variant.
    pub fn admits_balance(&self, balance: Decimal) -> bool {
        balance >= self.floor()
    }
}

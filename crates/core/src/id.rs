//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of an account.
///
/// Plain integers, handed out in increasing order by [`AccountIdAllocator`] and
/// never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::validation(format!("AccountId: {e}")))?;
        Ok(Self(value))
    }
}

/// Identifier of a single history entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Uses UUIDv7, so ids sort in creation order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EntryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::validation(format!("EntryId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Monotonic account id source.
///
/// Owned by a single ledger; the only way to advance it is [`allocate`](Self::allocate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdAllocator {
    next: u64,
}

impl AccountIdAllocator {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Hand out the next id.
    ///
    /// `u64::MAX` is never issued: it marks an exhausted allocator, after which
    /// every call fails instead of repeating an id.
    pub fn allocate(&mut self) -> DomainResult<AccountId> {
        if self.next == u64::MAX {
            return Err(DomainError::IdsExhausted);
        }
        let id = AccountId(self.next);
        self.next += 1;
        Ok(id)
    }

    /// The id the next call to `allocate` will return.
    pub fn peek(&self) -> AccountId {
        AccountId(self.next)
    }
}

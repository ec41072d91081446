use core::cmp::Ordering;
use core::ops::AddAssign;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankbook_core::amount::{checked_add, checked_mul, ensure_positive};
use bankbook_core::{AccountId, AggregateRoot, DomainError, DomainResult};

use crate::policy::{AccountKind, AccountPolicy};
use crate::transaction::{EntryKind, TransactionRecord};

const MONTHS_PER_YEAR: u32 = 12;

/// Aggregate root: Account.
///
/// Owns its balance and history. Every change goes through a decision step
/// that validates against the current state and returns the record to append,
/// then a commit step that appends it; a rejected decision leaves the account
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner: String,
    policy: AccountPolicy,
    balance: Decimal,
    history: Vec<TransactionRecord>,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account. A positive `initial` balance is booked as a deposit.
    /// A negative one is booked as a withdrawal when the policy's floor allows
    /// it, and ignored otherwise; zero opens the account empty.
    pub(crate) fn open(
        id: AccountId,
        owner: impl Into<String>,
        policy: AccountPolicy,
        initial: Decimal,
    ) -> Self {
        let mut account = Self {
            id,
            owner: owner.into(),
            policy,
            balance: Decimal::ZERO,
            history: Vec::new(),
            opened_at: Utc::now(),
        };

        if initial > Decimal::ZERO {
            if let Ok(record) = account.decide_deposit(initial) {
                account.commit(record);
            }
        } else if initial < Decimal::ZERO {
            match account.decide_withdrawal(-initial) {
                Ok(record) => account.commit(record),
                Err(err) => {
                    tracing::warn!(account_id = %id, %initial, %err, "negative opening balance ignored");
                }
            }
        }

        account
    }

    pub fn account_id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    pub fn kind(&self) -> AccountKind {
        self.policy.kind()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// History in chronological order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Sum of every posting entry; equals `balance()` for a consistent account.
    pub fn history_total(&self) -> Decimal {
        self.history
            .iter()
            .map(TransactionRecord::posted_amount)
            .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
    }

    /// Orders accounts by balance only.
    pub fn cmp_balance(&self, other: &Account) -> Ordering {
        self.balance.cmp(&other.balance)
    }

    pub fn summary_line(&self) -> String {
        self.to_string()
    }

    pub fn deposit(&mut self, amount: Decimal) -> DomainResult<()> {
        let record = self.decide_deposit(amount).inspect_err(|err| {
            tracing::debug!(account_id = %self.id, %amount, %err, "deposit rejected");
        })?;
        self.commit(record);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> DomainResult<()> {
        let record = self.decide_withdrawal(amount).inspect_err(|err| {
            tracing::debug!(account_id = %self.id, %amount, %err, "withdrawal rejected");
        })?;
        self.commit(record);
        Ok(())
    }

    /// Credit `months` of interest at the account's annual rate, prorated
    /// monthly. Returns the interest credited.
    ///
    /// Only savings accounts accrue interest. A zero balance accrues nothing and
    /// appends no entry.
    pub fn apply_interest(&mut self, months: Decimal) -> DomainResult<Decimal> {
        let decided = self.decide_interest(months).inspect_err(|err| {
            tracing::debug!(account_id = %self.id, %months, %err, "interest accrual rejected");
        })?;
        match decided {
            Some(record) => {
                let interest = record.amount();
                self.commit(record);
                Ok(interest)
            }
            None => Ok(Decimal::ZERO),
        }
    }

    pub(crate) fn decide_deposit(&self, amount: Decimal) -> DomainResult<TransactionRecord> {
        let amount = ensure_positive(amount)?;
        checked_add(self.balance, amount)?;
        Ok(TransactionRecord::new(amount, EntryKind::Deposit))
    }

    pub(crate) fn decide_withdrawal(&self, amount: Decimal) -> DomainResult<TransactionRecord> {
        let amount = ensure_positive(amount)?;
        if !self.policy.permits_withdrawal(self.balance, amount) {
            return Err(DomainError::InsufficientFunds {
                requested: amount,
                available: self.policy.available(self.balance),
            });
        }
        Ok(TransactionRecord::new(-amount, EntryKind::Withdrawal))
    }

    fn decide_interest(&self, months: Decimal) -> DomainResult<Option<TransactionRecord>> {
        let AccountPolicy::Savings { interest_rate } = self.policy else {
            return Err(DomainError::not_applicable(
                "interest accrual",
                self.type_name(),
            ));
        };
        if months <= Decimal::ZERO {
            return Err(DomainError::InvalidDuration(months));
        }

        let interest = checked_mul(checked_mul(self.balance, interest_rate)?, months)?
            .checked_div(Decimal::from(MONTHS_PER_YEAR))
            .ok_or(DomainError::AmountOverflow)?;
        if interest.is_zero() {
            return Ok(None);
        }

        let after = checked_add(self.balance, interest)?;
        if !self.policy.admits_balance(after) {
            return Err(DomainError::invariant(
                "interest would take the balance below its floor",
            ));
        }
        Ok(Some(TransactionRecord::new(interest, EntryKind::Interest)))
    }

    /// Append a decided record. Memo entries leave the balance alone.
    pub(crate) fn commit(&mut self, record: TransactionRecord) {
        self.balance += record.posted_amount();
        tracing::debug!(
            account_id = %self.id,
            entry = %record.description(),
            amount = %record.amount(),
            balance = %self.balance,
            "entry appended"
        );
        self.history.push(record);
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.history.len() as u64
    }
}

/// `account += amount` deposits; rejected amounts are silently ignored.
impl AddAssign<Decimal> for Account {
    fn add_assign(&mut self, amount: Decimal) {
        let _ = self.deposit(amount);
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] ID: {} | Owner: {} | Balance: {:.2}",
            self.type_name(),
            self.id,
            self.owner,
            self.balance
        )
    }
}

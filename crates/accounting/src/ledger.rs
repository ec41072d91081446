use core::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rust_decimal::Decimal;

use bankbook_core::amount::ensure_positive;
use bankbook_core::{AccountId, AccountIdAllocator, DomainError, DomainResult};

use crate::account::Account;
use crate::config::LedgerConfig;
use crate::policy::{AccountKind, AccountPolicy};
use crate::transaction::{EntryKind, TransactionRecord};

/// Registry of accounts and the only place transfers happen.
///
/// The ledger exclusively owns every account. References handed out by
/// [`find_account`](Self::find_account) borrow the ledger, so none can survive a
/// [`delete_account`](Self::delete_account); callers that need a longer-lived
/// handle keep the [`AccountId`] and look it up again.
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
    ids: AccountIdAllocator,
    accounts: BTreeMap<AccountId, Account>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ids: AccountIdAllocator::starting_at(config.first_account_id),
            accounts: BTreeMap::new(),
        }
    }

    /// Reassemble a ledger from already-validated parts.
    pub(crate) fn from_parts(
        config: LedgerConfig,
        ids: AccountIdAllocator,
        accounts: BTreeMap<AccountId, Account>,
    ) -> Self {
        Self {
            config,
            ids,
            accounts,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The id the next created account will receive.
    pub fn next_account_id(&self) -> AccountId {
        self.ids.peek()
    }

    /// Open an account of `kind` using the configured variant defaults.
    ///
    /// Fails only once the id space is exhausted.
    pub fn create_account(
        &mut self,
        owner: impl Into<String>,
        kind: AccountKind,
        initial_balance: Decimal,
    ) -> DomainResult<&Account> {
        let policy = match kind {
            AccountKind::Base => AccountPolicy::Base,
            AccountKind::Savings => AccountPolicy::savings(self.config.default_savings_rate),
            AccountKind::Checking => AccountPolicy::checking(self.config.default_overdraft_limit),
        };
        self.create_account_with_policy(owner, policy, initial_balance)
    }

    /// Open an account with explicit variant terms.
    pub fn create_account_with_policy(
        &mut self,
        owner: impl Into<String>,
        policy: AccountPolicy,
        initial_balance: Decimal,
    ) -> DomainResult<&Account> {
        let id = self.ids.allocate().inspect_err(|err| {
            tracing::warn!(%err, "account not created");
        })?;
        let account = Account::open(id, owner, policy, initial_balance);

        tracing::info!(
            account_id = %id,
            kind = %account.kind(),
            owner = %account.owner(),
            balance = %account.balance(),
            "account created"
        );

        match self.accounts.entry(id) {
            Entry::Vacant(slot) => Ok(slot.insert(account)),
            Entry::Occupied(_) => Err(DomainError::invariant(format!(
                "account id {id} is already registered"
            ))),
        }
    }

    /// Remove an account and hand it back; its history leaves with it.
    pub fn delete_account(&mut self, id: AccountId) -> DomainResult<Account> {
        let account = self
            .accounts
            .remove(&id)
            .ok_or(DomainError::AccountNotFound(id))?;

        tracing::info!(
            account_id = %id,
            balance = %account.balance(),
            entries = account.transactions().len(),
            "account deleted"
        );
        Ok(account)
    }

    pub fn find_account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn find_account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// All accounts in ascending id order.
    pub fn list_accounts(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of every live balance.
    pub fn total_holdings(&self) -> Decimal {
        self.accounts
            .values()
            .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.balance()))
    }

    pub fn deposit(&mut self, id: AccountId, amount: Decimal) -> DomainResult<()> {
        self.account_mut(id)?.deposit(amount)
    }

    pub fn withdraw(&mut self, id: AccountId, amount: Decimal) -> DomainResult<()> {
        self.account_mut(id)?.withdraw(amount)
    }

    pub fn apply_interest(&mut self, id: AccountId, months: Decimal) -> DomainResult<Decimal> {
        self.account_mut(id)?.apply_interest(months)
    }

    /// Compare two accounts by balance.
    pub fn compare_balances(&self, a: AccountId, b: AccountId) -> DomainResult<Ordering> {
        let first = self.account(a)?;
        let second = self.account(b)?;
        Ok(first.cmp_balance(second))
    }

    /// Move `amount` from one account to another.
    ///
    /// Both legs are decided against current state before anything is
    /// appended, so a rejected transfer leaves both accounts exactly as they
    /// were. On success each side gains two entries: the withdrawal or deposit
    /// that moves the money, then a memo naming the counterparty.
    ///
    /// Transferring to the same account is allowed; it nets to zero and appends
    /// four entries.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal) -> DomainResult<()> {
        let result = self.try_transfer(from, to, amount);
        match &result {
            Ok(()) => tracing::debug!(%from, %to, %amount, "transfer committed"),
            Err(err) => tracing::debug!(%from, %to, %amount, %err, "transfer rejected"),
        }
        result
    }

    fn try_transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal) -> DomainResult<()> {
        let amount = ensure_positive(amount)?;
        self.account(from)?;
        self.account(to)?;

        let withdrawal = self.account(from)?.decide_withdrawal(amount)?;
        let deposit = self.account(to)?.decide_deposit(amount)?;

        self.account_mut(from)?.commit(withdrawal);
        self.account_mut(to)?.commit(deposit);
        self.account_mut(from)?
            .commit(TransactionRecord::new(-amount, EntryKind::TransferOut { to }));
        self.account_mut(to)?
            .commit(TransactionRecord::new(amount, EntryKind::TransferIn { from }));

        Ok(())
    }

    fn account(&self, id: AccountId) -> DomainResult<&Account> {
        self.accounts.get(&id).ok_or(DomainError::AccountNotFound(id))
    }

    fn account_mut(&mut self, id: AccountId) -> DomainResult<&mut Account> {
        self.accounts
            .get_mut(&id)
            .ok_or(DomainError::AccountNotFound(id))
    }

    pub(crate) fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub(crate) fn allocator(&self) -> &AccountIdAllocator {
        &self.ids
    }
}

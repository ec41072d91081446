//! Point-in-time export/import of a whole ledger.
//!
//! Nothing is persisted automatically; callers decide where the JSON goes.
//! Restoring re-checks every ledger invariant, so a hand-edited or truncated
//! snapshot is rejected instead of producing an inconsistent ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bankbook_core::{AccountId, AccountIdAllocator, DomainError, DomainResult};

use crate::account::Account;
use crate::config::LedgerConfig;
use crate::ledger::Ledger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub config: LedgerConfig,
    /// Id the restored ledger will give its next account.
    pub next_account_id: AccountId,
    /// Accounts in ascending id order, with full history.
    pub accounts: Vec<Account>,
}

impl LedgerSnapshot {
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::validation(format!("snapshot encoding failed: {e}")))
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("snapshot is not valid JSON: {e}")))
    }
}

impl Ledger {
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            config: *self.config(),
            next_account_id: self.allocator().peek(),
            accounts: self.accounts().cloned().collect(),
        }
    }

    /// Rebuild a ledger from a snapshot after validating it.
    pub fn restore(snapshot: LedgerSnapshot) -> DomainResult<Self> {
        let next = snapshot.next_account_id;
        let mut accounts = BTreeMap::new();

        for account in snapshot.accounts {
            let id = account.account_id();
            validate_account(&account)?;
            if id >= next {
                return Err(DomainError::invariant(format!(
                    "account {id} is not below next_account_id {next}"
                )));
            }
            if accounts.insert(id, account).is_some() {
                return Err(DomainError::invariant(format!("duplicate account id {id}")));
            }
        }

        tracing::info!(
            accounts = accounts.len(),
            next_account_id = %next,
            "ledger restored from snapshot"
        );

        Ok(Ledger::from_parts(
            snapshot.config,
            AccountIdAllocator::starting_at(next.value()),
            accounts,
        ))
    }
}

fn validate_account(account: &Account) -> DomainResult<()> {
    let id = account.account_id();

    if let Some(record) = account.transactions().iter().find(|r| r.amount().is_zero()) {
        return Err(DomainError::validation(format!(
            "account {id} has a zero-amount entry {}",
            record.entry_id()
        )));
    }
    if account.history_total() != account.balance() {
        return Err(DomainError::invariant(format!(
            "account {id} balance {} does not match its history total {}",
            account.balance(),
            account.history_total()
        )));
    }
    if !account.policy().admits_balance(account.balance()) {
        return Err(DomainError::invariant(format!(
            "account {id} balance {} is below the {} floor {}",
            account.balance(),
            account.type_name(),
            account.policy().floor()
        )));
    }
    Ok(())
}

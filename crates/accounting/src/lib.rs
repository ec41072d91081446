//! Accounting module: accounts, their histories, and the ledger that owns them.
//!
//! Pure domain logic only: no IO, no persistence. Snapshots are plain values
//! the caller can store wherever it likes.

pub mod account;
pub mod config;
pub mod ledger;
pub mod policy;
pub mod snapshot;
pub mod transaction;

pub use account::Account;
pub use config::LedgerConfig;
pub use ledger::Ledger;
pub use policy::{AccountKind, AccountPolicy};
pub use snapshot::LedgerSnapshot;
pub use transaction::{EntryKind, TransactionRecord};

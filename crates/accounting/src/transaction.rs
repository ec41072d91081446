use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankbook_core::{AccountId, EntryId, ValueObject};

/// What a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Interest,
    /// Memo on the paying side of a transfer.
    TransferOut { to: AccountId },
    /// Memo on the receiving side of a transfer.
    TransferIn { from: AccountId },
}

impl EntryKind {
    /// Whether entries of this kind move the balance.
    ///
    /// Transfer memos annotate the withdrawal/deposit pair that precedes them;
    /// the money already moved with those.
    pub fn posts_to_balance(&self) -> bool {
        !matches!(self, EntryKind::TransferOut { .. } | EntryKind::TransferIn { .. })
    }

    pub fn description(&self) -> String {
        match self {
            EntryKind::Deposit => "Deposit".to_string(),
            EntryKind::Withdrawal => "Withdrawal".to_string(),
            EntryKind::Interest => "Interest".to_string(),
            EntryKind::TransferOut { to } => format!("Transfer to {to}"),
            EntryKind::TransferIn { from } => format!("Transfer from {from}"),
        }
    }
}

/// One immutable history entry.
///
/// Amounts are signed: positive = credit, negative = debit. Never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    entry_id: EntryId,
    timestamp: DateTime<Utc>,
    amount: Decimal,
    kind: EntryKind,
}

impl ValueObject for TransactionRecord {}

impl TransactionRecord {
    /// Records are only minted by accounts, which have already validated the
    /// amount against the balance.
    pub(crate) fn new(amount: Decimal, kind: EntryKind) -> Self {
        debug_assert!(!amount.is_zero(), "history entries never carry zero");
        Self {
            entry_id: EntryId::new(),
            timestamp: Utc::now(),
            amount,
            kind,
        }
    }

    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> String {
        self.kind.description()
    }

    /// Contribution of this entry to the account balance.
    pub fn posted_amount(&self) -> Decimal {
        if self.kind.posts_to_balance() {
            self.amount
        } else {
            Decimal::ZERO
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount.is_sign_positive()
    }
}

impl core::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.is_credit() { '+' } else { '-' };
        write!(
            f,
            "{} | {} {:.2} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            sign,
            self.amount.abs(),
            self.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn transfer_memos_do_not_post_to_balance() {
        let memo = TransactionRecord::new(
            dec!(-300),
            EntryKind::TransferOut {
                to: AccountId::new(1002),
            },
        );
        assert_eq!(memo.amount(), dec!(-300));
        assert_eq!(memo.posted_amount(), Decimal::ZERO);
        assert_eq!(memo.description(), "Transfer to 1002");

        let withdrawal = TransactionRecord::new(dec!(-300), EntryKind::Withdrawal);
        assert_eq!(withdrawal.posted_amount(), dec!(-300));
    }

    #[test]
    fn display_shows_sign_magnitude_and_description() {
        let credit = TransactionRecord::new(dec!(300), EntryKind::Deposit);
        let rendered = credit.to_string();
        assert!(rendered.ends_with(" | + 300.00 | Deposit"), "{rendered}");

        let debit = TransactionRecord::new(
            dec!(-12.5),
            EntryKind::TransferIn {
                from: AccountId::new(1001),
            },
        );
        assert!(debit.to_string().ends_with(" | - 12.50 | Transfer from 1001"));
    }

    #[test]
    fn entry_kind_serializes_with_a_type_tag() {
        let json = serde_json::to_value(EntryKind::TransferIn {
            from: AccountId::new(1003),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "transfer_in", "from": 1003}));
    }
}

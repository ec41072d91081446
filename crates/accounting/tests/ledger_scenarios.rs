//! End-to-end scenarios against the public ledger API.

use bankbook_accounting::{AccountKind, EntryKind, Ledger, LedgerSnapshot};
use bankbook_core::{AggregateRoot, DomainError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn savings_interest_for_one_month() {
    let mut ledger = Ledger::new();
    let alice = ledger
        .create_account("Alice", AccountKind::Savings, dec!(1000))
        .unwrap()
        .account_id();

    ledger.apply_interest(alice, dec!(1)).unwrap();

    let balance = ledger.find_account(alice).unwrap().balance();
    assert_eq!(balance.round_dp(2), dec!(1001.67));
    assert_eq!(balance.round_dp(6), dec!(1001.666667));
}

#[test]
fn checking_overdraft_floor() {
    let mut ledger = Ledger::new();
    let bob = ledger
        .create_account("Bob", AccountKind::Checking, dec!(200))
        .unwrap()
        .account_id();

    ledger.withdraw(bob, dec!(600)).unwrap();
    assert_eq!(ledger.find_account(bob).unwrap().balance(), dec!(-400));

    let err = ledger.withdraw(bob, dec!(200)).unwrap_err();
    assert_eq!(
        err,
        DomainError::InsufficientFunds {
            requested: dec!(200),
            available: dec!(100),
        }
    );
    assert_eq!(ledger.find_account(bob).unwrap().balance(), dec!(-400));
}

#[test]
fn base_account_cannot_overdraw() {
    let mut ledger = Ledger::new();
    let clara = ledger
        .create_account("Clara", AccountKind::Base, dec!(50))
        .unwrap()
        .account_id();

    assert!(ledger.withdraw(clara, dec!(100)).is_err());

    let clara = ledger.find_account(clara).unwrap();
    assert_eq!(clara.balance(), dec!(50));
    assert_eq!(clara.transactions().len(), 1);
    assert_eq!(clara.transactions()[0].kind(), EntryKind::Deposit);
}

#[test]
fn successful_transfer_appends_two_entries_per_side() {
    let mut ledger = Ledger::new();
    let a = ledger
        .create_account("A", AccountKind::Base, dec!(1000))
        .unwrap()
        .account_id();
    let b = ledger
        .create_account("B", AccountKind::Base, Decimal::ZERO)
        .unwrap()
        .account_id();
    let (a_before, b_before) = (
        ledger.find_account(a).unwrap().version(),
        ledger.find_account(b).unwrap().version(),
    );

    ledger.transfer(a, b, dec!(300)).unwrap();

    let source = ledger.find_account(a).unwrap();
    let target = ledger.find_account(b).unwrap();
    assert_eq!(source.balance(), dec!(700));
    assert_eq!(target.balance(), dec!(300));
    assert_eq!(source.version(), a_before + 2);
    assert_eq!(target.version(), b_before + 2);

    let source_kinds: Vec<EntryKind> = source.transactions()[1..].iter().map(|r| r.kind()).collect();
    assert_eq!(source_kinds, vec![EntryKind::Withdrawal, EntryKind::TransferOut { to: b }]);
    let target_kinds: Vec<EntryKind> = target.transactions().iter().map(|r| r.kind()).collect();
    assert_eq!(target_kinds, vec![EntryKind::Deposit, EntryKind::TransferIn { from: a }]);
}

#[test]
fn rejected_transfer_changes_nothing() {
    let mut ledger = Ledger::new();
    let a = ledger
        .create_account("A", AccountKind::Base, dec!(100))
        .unwrap()
        .account_id();
    let b = ledger
        .create_account("B", AccountKind::Savings, dec!(10))
        .unwrap()
        .account_id();
    let before = ledger.snapshot();

    assert!(ledger.transfer(a, b, dec!(500)).is_err());

    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn listing_and_snapshot_after_mixed_activity() {
    let mut ledger = Ledger::new();
    let ids: Vec<_> = ["Alice Nguyen", "Bob Tran", "Clara Le"]
        .into_iter()
        .zip([AccountKind::Savings, AccountKind::Checking, AccountKind::Base])
        .zip([dec!(1000), dec!(200), dec!(50)])
        .map(|((owner, kind), initial)| ledger.create_account(owner, kind, initial).unwrap().account_id())
        .collect();

    ledger.transfer(ids[0], ids[2], dec!(25)).unwrap();
    ledger.delete_account(ids[1]).unwrap();

    let lines: Vec<String> = ledger.list_accounts().iter().map(|a| a.summary_line()).collect();
    assert_eq!(
        lines,
        vec![
            "[Savings] ID: 1001 | Owner: Alice Nguyen | Balance: 975.00",
            "[Account] ID: 1003 | Owner: Clara Le | Balance: 75.00",
        ]
    );

    let json = ledger.snapshot().to_json().unwrap();
    let restored = Ledger::restore(LedgerSnapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.total_holdings(), dec!(1050));
    assert!(restored.find_account(ids[1]).is_none());
}

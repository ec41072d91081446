use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bankbook_accounting::{AccountKind, Ledger};
use bankbook_core::AccountId;
use rust_decimal::Decimal;

fn setup_ledger(accounts: usize) -> (Ledger, Vec<AccountId>) {
    let mut ledger = Ledger::new();
    let ids = (0..accounts)
        .map(|n| {
            let kind = if n % 2 == 0 {
                AccountKind::Checking
            } else {
                AccountKind::Base
            };
            ledger
                .create_account(format!("bench-{n}"), kind, Decimal::new(1_000_000, 2))
                .unwrap()
                .account_id()
        })
        .collect();
    (ledger, ids)
}

/// Round-robin transfers; every transfer is small enough to succeed.
fn bench_transfer_throughput(c: &mut Criterion) {
    bankbook_observability::init_pretty();

    let mut group = c.benchmark_group("transfer_throughput");
    for transfers in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(transfers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(transfers),
            &transfers,
            |b, &transfers| {
                b.iter_batched(
                    || setup_ledger(16),
                    |(mut ledger, ids)| {
                        for n in 0..transfers {
                            let from = ids[n % ids.len()];
                            let to = ids[(n + 1) % ids.len()];
                            let _ = ledger.transfer(from, to, Decimal::new(1, 2));
                        }
                        black_box(ledger.total_holdings())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

/// Rejected transfers must stay cheap: nothing is appended.
fn bench_rejected_transfer(c: &mut Criterion) {
    let (mut ledger, ids) = setup_ledger(2);
    let too_much = Decimal::new(1_000_000_000, 2);

    c.bench_function("transfer_rejected_insufficient_funds", |b| {
        b.iter(|| black_box(ledger.transfer(ids[1], ids[0], too_much).is_err()))
    });
}

fn bench_snapshot_round_trip(c: &mut Criterion) {
    let (mut ledger, ids) = setup_ledger(64);
    for n in 0..1_000 {
        let _ = ledger.transfer(ids[n % 64], ids[(n * 7 + 1) % 64], Decimal::new(25, 2));
    }

    c.bench_function("snapshot_json_round_trip", |b| {
        b.iter(|| {
            let json = ledger.snapshot().to_json().unwrap();
            let snapshot = bankbook_accounting::LedgerSnapshot::from_json(&json).unwrap();
            black_box(Ledger::restore(snapshot).unwrap().len())
        })
    });
}

criterion_group!(
    benches,
    bench_transfer_throughput,
    bench_rejected_transfer,
    bench_snapshot_round_trip
);
criterion_main!(benches);

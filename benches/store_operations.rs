// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification store operations.
//!
//! Measures the performance of:
//! - Adding notifications (record creation + timer scheduling)
//! - Firing due auto-hide timers on tick
//! - Removing notifications by id
//! - Projecting the floating stack

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use yatra_notify::domain::notification::{
    floating, Clock, FloatingPolicy, ManualClock, NotificationDraft, NotificationId, Store,
};

const STORE_SIZE: usize = 200;

fn filled_store(clock: &ManualClock) -> (Store<()>, Vec<NotificationId>) {
    let mut store = Store::with_clock(Arc::new(clock.clone()));
    let ids = (0..STORE_SIZE)
        .map(|i| store.add(NotificationDraft::info(format!("notification {i}"), "body")))
        .collect();
    (store, ids)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    group.bench_function("add_200", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            black_box(filled_store(&clock));
        });
    });

    group.finish();
}

/// Measures a tick that expires every notification at once.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    group.bench_function("tick_expire_200", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let (store, _) = filled_store(&clock);
                clock.advance(Duration::from_secs(6));
                store
            },
            |mut store| black_box(store.tick()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("tick_idle_200", |b| {
        let clock = ManualClock::new();
        let (mut store, _) = filled_store(&clock);
        b.iter(|| black_box(store.tick()));
    });

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    group.bench_function("remove_all_200", |b| {
        b.iter_batched(
            || filled_store(&ManualClock::new()),
            |(mut store, ids)| {
                for id in ids {
                    black_box(store.remove(id));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_floating(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    let clock = ManualClock::new();
    let (store, _) = filled_store(&clock);
    group.bench_function("floating_projection", |b| {
        b.iter(|| black_box(floating(&store, clock.now(), FloatingPolicy::default()).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_tick, bench_remove, bench_floating);
criterion_main!(benches);

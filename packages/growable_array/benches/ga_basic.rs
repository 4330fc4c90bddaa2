//! Basic benchmarks for the `growable_array` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use growable_array::GrowableArray;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("ga_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(GrowableArray::<TestItem>::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_first");
    group.bench_function("push_first", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(GrowableArray::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                array.push_back(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("at_one");
    group.bench_function("at_one", |b| {
        b.iter_custom(|iters| {
            let array = GrowableArray::from_elem(100, &TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(array.at(black_box(50)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("clone_1k");
    group.bench_function("clone_1k", |b| {
        b.iter_custom(|iters| {
            let array = GrowableArray::from_elem(1000, &TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(array.clone()));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("ga_slow");

    let allocs_op = allocs.operation("push_10k");
    group.bench_function("push_10k", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(GrowableArray::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                for _ in 0..10_000 {
                    array.push_back(black_box(TEST_VALUE));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_10k_reserved");
    group.bench_function("push_10k_reserved", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| GrowableArray::<TestItem>::with_capacity(10_000))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                for _ in 0..10_000 {
                    array.push_back(black_box(TEST_VALUE));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front_1k");
    group.bench_function("insert_front_1k", |b| {
        // Worst case for shifting: every insert moves the whole tail.
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(GrowableArray::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                for _ in 0..1000 {
                    _ = black_box(array.insert(0, black_box(TEST_VALUE)));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("erase_front_1k");
    group.bench_function("erase_front_1k", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| GrowableArray::from_elem(1000, &TEST_VALUE))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                while !array.is_empty() {
                    _ = black_box(array.erase(0));
                }
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}

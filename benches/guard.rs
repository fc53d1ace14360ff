//! Benchmarks for the protected frame.
//!
//! Compares guarded invocation against a bare call. Each benchmark pair does
//! EQUIVALENT work - same operation body, same return value.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guard_this::{protect, run, Captured};

// ============================================================
// Test helpers
// ============================================================

#[inline(never)]
fn work() -> i32 {
    black_box(21) * 2
}

/// The default hook prints every panic to stderr; the capture benchmarks
/// panic on every iteration, so silence it up front.
fn silence_panics() {
    std::panic::set_hook(Box::new(|_| {}));
}

// ============================================================
// 1. SUCCESS PATH: guarded call vs bare call
// ============================================================

fn bench_bare_call(c: &mut Criterion) {
    c.bench_function("bare_call", |b| b.iter(|| black_box(work())));
}

fn bench_protect_success(c: &mut Criterion) {
    c.bench_function("protect_success", |b| {
        b.iter(|| black_box(protect(work).unwrap()))
    });
}

fn bench_run_noop(c: &mut Criterion) {
    c.bench_function("run_noop", |b| b.iter(|| black_box(run(|| {}))));
}

// ============================================================
// 2. CAPTURE PATH: unwind and payload translation
// ============================================================

fn bench_capture_panic(c: &mut Criterion) {
    silence_panics();
    c.bench_function("capture_panic", |b| {
        b.iter(|| black_box(run(|| panic!("fail"))))
    });
}

fn bench_capture_raise(c: &mut Criterion) {
    silence_panics();
    c.bench_function("capture_raise", |b| {
        b.iter(|| {
            black_box(run(|| {
                Captured::new("Bench", "fail").kv("iter", 1_u64).raise()
            }))
        })
    });
}

// ============================================================
// 3. BASELINE: capture value construction
// ============================================================

fn bench_captured_value(c: &mut Criterion) {
    c.bench_function("captured_value", |b| {
        b.iter(|| black_box(Captured::new("Bench", "fail").kv("iter", 1_u64)))
    });
}

criterion_group!(
    benches,
    bench_bare_call,
    bench_protect_success,
    bench_run_noop,
    bench_capture_panic,
    bench_capture_raise,
    bench_captured_value,
);
criterion_main!(benches);

//! Criterion micro-benchmarks for append-with-growth, duplication, and
//! element-wise addition.

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growvec::{GrowVec, NullSink};

/// Build a silent buffer pre-filled with `len` sequential values.
fn make_filled(len: usize) -> GrowVec<u64> {
    let mut buf = GrowVec::with_capacity(len).with_sink(Rc::new(NullSink));
    for v in 0..len as u64 {
        buf.push(v);
    }
    buf
}

/// Benchmark: append 1024 values starting from capacity 1, letting
/// geometric growth do all reallocation.
fn bench_push_with_growth(c: &mut Criterion) {
    c.bench_function("push_1024_with_growth", |b| {
        b.iter(|| {
            let mut buf = GrowVec::<u64>::new().with_sink(Rc::new(NullSink));
            for v in 0..1024u64 {
                buf.push(v);
            }
            black_box(buf.occupied());
        });
    });
}

/// Benchmark: duplicate a 1024-element buffer (fresh block + full clone).
fn bench_duplicate(c: &mut Criterion) {
    let buf = make_filled(1024);
    c.bench_function("duplicate_1024", |b| {
        b.iter(|| {
            let copy = buf.duplicate();
            black_box(copy.capacity());
        });
    });
}

/// Benchmark: element-wise addition of two 1024-element buffers.
fn bench_combine(c: &mut Criterion) {
    let a = make_filled(1024);
    let b_buf = make_filled(1024);
    c.bench_function("combine_1024", |b| {
        b.iter(|| {
            let sum = a.combine(&b_buf);
            black_box(sum.occupied());
        });
    });
}

criterion_group!(
    benches,
    bench_push_with_growth,
    bench_duplicate,
    bench_combine
);
criterion_main!(benches);

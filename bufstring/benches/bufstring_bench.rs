//! Benchmarks for BufString appends.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use giztoy_bufstring::BufString;

fn bench_append_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("bufstring_append_text");

    for unit in [64, 1024, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("small_pieces", unit), unit, |b, &unit| {
            b.iter(|| {
                let mut buf = BufString::with_capacity(unit).unwrap();
                for _ in 0..1000 {
                    buf.append_text(Some("key=value;")).unwrap();
                }
                black_box(buf)
            });
        });
    }

    group.finish();
}

fn bench_append_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bufstring_append_bytes");
    let chunk = vec![0xa5u8; 300];

    for unit in [64, 1024, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("chunks", unit), unit, |b, &unit| {
            b.iter(|| {
                let mut buf = BufString::with_capacity(unit).unwrap();
                for _ in 0..1000 {
                    buf.append_bytes(Some(&chunk)).unwrap();
                }
                black_box(buf)
            });
        });
    }

    group.finish();
}

fn bench_vs_vec(c: &mut Criterion) {
    c.bench_function("vec_extend_baseline", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(1024);
            for _ in 0..1000 {
                v.extend_from_slice(b"key=value;");
            }
            black_box(v)
        });
    });
}

criterion_group!(benches, bench_append_text, bench_append_bytes, bench_vs_vec);
criterion_main!(benches);

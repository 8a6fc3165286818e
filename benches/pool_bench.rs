//! Benchmarks for pixpool.
//!
//! Run with:
//!     cargo bench

use std::sync::Arc;
use std::thread;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pixpool::{FitPolicy, FitRequest, PixelBuffer, PixelFormat, ReusePool};

fn bench_reuse_vs_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("reuse_vs_alloc");

    // Typical page sizes
    for (width, height) in [(320, 480), (1080, 1920)] {
        group.bench_function(format!("alloc_{}x{}", width, height), |b| {
            b.iter(|| {
                let buf = PixelBuffer::new(width, height, PixelFormat::Rgba8888).unwrap();
                black_box(buf.byte_capacity())
            });
        });

        let pool = ReusePool::default();
        pool.release(PixelBuffer::new(width, height, PixelFormat::Rgba8888).unwrap())
            .unwrap();
        group.bench_function(format!("reuse_{}x{}", width, height), |b| {
            b.iter(|| {
                let buf = pool
                    .acquire_exact_size(width, height, PixelFormat::Rgba8888)
                    .unwrap();
                let bytes = buf.byte_capacity();
                pool.release(buf).unwrap();
                black_box(bytes)
            });
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    // The match sits among many non-matching buffers
    for size in [8u32, 64, 256] {
        let pool = ReusePool::default();
        for i in 1..=size {
            pool.release(PixelBuffer::new(i, 1, PixelFormat::Alpha8).unwrap())
                .unwrap();
        }

        group.bench_function(format!("exact_{}", size), |b| {
            b.iter(|| {
                let buf = pool
                    .acquire_exact_size(black_box(size), 1, PixelFormat::Alpha8)
                    .unwrap();
                pool.release(buf).unwrap();
            });
        });

        let request = FitRequest::new(size, 1, PixelFormat::Alpha8);
        group.bench_function(format!("best_fit_{}", size), |b| {
            b.iter(|| {
                let buf = pool
                    .acquire_best_fit(black_box(&request), FitPolicy::Modern)
                    .unwrap();
                pool.release(buf).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    group.bench_function("4_threads", |b| {
        let pool = Arc::new(ReusePool::default());
        for _ in 0..4 {
            pool.release(PixelBuffer::new(256, 256, PixelFormat::Rgba8888).unwrap())
                .unwrap();
        }

        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| {
                        for _ in 0..100 {
                            if let Some(buf) =
                                pool.acquire_exact_size(256, 256, PixelFormat::Rgba8888)
                            {
                                pool.release(buf).unwrap();
                            }
                        }
                    });
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reuse_vs_alloc, bench_scan, bench_contended);
criterion_main!(benches);

//! Benchmarks for bpoolrs.
//!
//! Run with:
//!     cargo bench

use std::sync::Arc;
use std::thread;

use bytes::BytesMut;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bpoolrs::BufferPool;

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.throughput(Throughput::Elements(1));

    for alloc in [512, 4 * 1024, 64 * 1024] {
        let payload = vec![0xA5u8; alloc / 2];

        group.bench_function(format!("pooled_{alloc}"), |b| {
            let pool: BufferPool = BufferPool::new(16, alloc);
            b.iter(|| {
                let mut buf = pool.acquire();
                buf.extend_from_slice(black_box(&payload));
                pool.release(buf);
            });
        });

        // Baseline: fresh allocation every time
        group.bench_function(format!("unpooled_{alloc}"), |b| {
            b.iter(|| {
                let mut buf = BytesMut::with_capacity(alloc);
                buf.extend_from_slice(black_box(&payload));
                black_box(buf)
            });
        });
    }

    group.finish();
}

fn bench_saturated(c: &mut Criterion) {
    let mut group = c.benchmark_group("saturated");

    // Every release hits a full pool
    group.bench_function("release_into_full", |b| {
        let pool: BufferPool<Vec<u8>> = BufferPool::new(1, 64);
        pool.release(Vec::with_capacity(64));
        b.iter(|| pool.release(black_box(Vec::<u8>::with_capacity(64))));
    });

    // Every acquire misses
    group.bench_function("acquire_from_zero_size", |b| {
        let pool: BufferPool<Vec<u8>> = BufferPool::new(0, 64);
        b.iter(|| black_box(pool.acquire()));
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    let threads = 4;
    let cycles = 10_000;
    group.throughput(Throughput::Elements((threads * cycles) as u64));

    group.bench_function("4_threads", |b| {
        let pool: Arc<BufferPool> = Arc::new(BufferPool::new(8, 4096));
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let pool = Arc::clone(&pool);
                    thread::spawn(move || {
                        for _ in 0..cycles {
                            let mut buf = pool.acquire();
                            buf.extend_from_slice(b"frame header and body");
                            pool.release(buf);
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cycle, bench_saturated, bench_contended);
criterion_main!(benches);

//! Benchmarks for the per-frame assembly sampling path.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shards::assembly::{AssemblyConfig, ShardPool};

fn bench_pool_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_sample");

    for count in [1_200u32, 5_000, 20_000] {
        let config = AssemblyConfig {
            count,
            ..Default::default()
        };
        let mut pool = ShardPool::with_rng_seed(&config, 7);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut elapsed = 0.0_f32;
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                black_box(pool.sample(elapsed).len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pool_sample);
criterion_main!(benches);

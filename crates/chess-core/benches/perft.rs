use std::hint::black_box;
use std::time::Duration;

use chess_core::perft::perft_root;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const BENCH_DEPTHS: [u32; 2] = [2, 3];
const REFERENCE_COUNTS: &[(u32, u64)] = &[(0, 1), (1, 41)];

fn perft_benchmark(c: &mut Criterion) {
    for &(depth, expected) in REFERENCE_COUNTS {
        assert_eq!(
            perft_root(depth),
            expected,
            "reference node count mismatch at depth {depth}"
        );
    }

    let mut group = c.benchmark_group("perft_root");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for &depth in &BENCH_DEPTHS {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let nodes = perft_root(black_box(depth));
                black_box(nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);

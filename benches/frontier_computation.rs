use std::hint::black_box;
use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use frontier_rs::frontier::AssetParams;
use frontier_rs::frontier::TwoAssetInputs;
use frontier_rs::frontier::compute_frontier;
use frontier_rs::frontier::sample_random_portfolios;

fn bench_frontier_computation(c: &mut Criterion) {
  let mut group = c.benchmark_group("FrontierComputation");
  group.measurement_time(Duration::from_secs(3));
  group.warm_up_time(Duration::from_millis(500));

  let inputs = TwoAssetInputs::new(
    AssetParams::new(0.10, 0.20),
    AssetParams::new(0.15, 0.30),
    0.20,
  );

  for &resolution in &[200usize, 2_000usize] {
    group.bench_with_input(
      BenchmarkId::new("curve", resolution),
      &resolution,
      |b, &n| {
        b.iter(|| black_box(compute_frontier(&inputs, n, 0, None).unwrap()));
      },
    );
  }

  for &count in &[3_000usize, 30_000usize] {
    group.bench_with_input(BenchmarkId::new("random_cloud", count), &count, |b, &n| {
      b.iter(|| black_box(sample_random_portfolios(&inputs, n, Some(42))));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_frontier_computation);
criterion_main!(benches);

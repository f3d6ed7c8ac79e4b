// benches/generator_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sierpinski_gasket::config::NUM_POINTS;
use sierpinski_gasket::generator::{generate, CyclicIndexSource, RngIndexSource};
use sierpinski_gasket::geometry::Triangle;

fn generator_benchmark_fn(c: &mut Criterion) {
    let triangle = Triangle::default();

    let mut group = c.benchmark_group("GasketGeneration");

    group.bench_function("generate_5000_seeded_rng", |b| {
        let mut source = RngIndexSource::seeded(0x5eed);
        b.iter(|| generate(black_box(&triangle), black_box(NUM_POINTS), &mut source))
    });

    group.bench_function("generate_5000_cyclic", |b| {
        let mut source = CyclicIndexSource::new(&[0, 1, 2, 2, 1, 0, 1]);
        b.iter(|| generate(black_box(&triangle), black_box(NUM_POINTS), &mut source))
    });

    group.finish();
}

criterion_group!(benches, generator_benchmark_fn);
criterion_main!(benches);

use cgol::{Grid, Simulator};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_step(c: &mut Criterion) {
    const N: usize = 1 << 9;
    let mut grid = Grid::random(N, N, 0.3, Some(42)).unwrap();
    let mut sim = Simulator::new();
    c.bench_function("step_512", |b| b.iter(|| sim.step(&mut grid)));
}

fn bench_random(c: &mut Criterion) {
    const N: usize = 1 << 9;
    c.bench_function("random_512", |b| {
        b.iter(|| Grid::random(N, N, 0.3, Some(42)).unwrap())
    });
}

criterion_group!(benches, bench_step, bench_random);
criterion_main!(benches);

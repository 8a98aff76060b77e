use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physics::{FlappySim, GameConfig};

fn bench_step(c: &mut Criterion) {
    let mut sim = FlappySim::new(GameConfig::default()).unwrap();
    let mut i = 0u32;
    c.bench_function("world_step", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(sim.step(i % 9 == 0))
        });
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

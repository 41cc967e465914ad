use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiered_chess::game::engine::{Engine, EngineConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("computer vs computer 40 moves");
    group.sample_size(10);
    for &difficulty in &[300u16, 700, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &difficulty,
            |b, &difficulty| b.iter(|| computer_vs_computer(difficulty)),
        );
    }
    group.finish();
}

fn computer_vs_computer(difficulty: u16) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::with_config(EngineConfig::with_difficulty(difficulty));

    for _ in 0..40 {
        if engine.make_best_move_with_rng(&mut rng).is_err() {
            break;
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

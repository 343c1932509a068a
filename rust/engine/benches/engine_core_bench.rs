// rust/engine/benches/engine_core_bench.rs
#![forbid(unsafe_code)]

/**
 * Core engine micro-benchmarks.
 *
 * Focus:
 * - Transition kernel (`MoveEngine::simulate_one`)
 * - Multi-agent rollout scoring (`PositionRollout::run`)
 * - Selector decision latency on fixed boards
 * - A short annealing search
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tilegrid_engine::{
    AnnealingConfig, AnnealingPlacement, BeamConfig, BeamSearchSelector, Character, Coord,
    DirectionType, GreedySelector, GridConfig, MapState, MoveEngine, MoveSelector,
    PositionRollout,
};

fn board(seed: u64) -> MapState {
    MapState::random(GridConfig::default(), seed)
}

fn three_agents() -> Vec<Character> {
    vec![
        Character::new(Coord::new(0, 0)),
        Character::new(Coord::new(2, 2)),
        Character::new(Coord::new(4, 1)),
    ]
}

fn bench_simulate_one(c: &mut Criterion) {
    c.bench_function("engine.simulate_one.snake", |b| {
        b.iter_batched(
            || (board(20260228), Character::new(Coord::new(0, 0))),
            |(mut map, mut ch)| {
                for i in 0usize..15 {
                    let d = DirectionType::ALL[i % DirectionType::ALL.len()];
                    black_box(MoveEngine::simulate_one(&mut ch, &mut map, d));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_position_rollout(c: &mut Criterion) {
    c.bench_function("rollout.position.run", |b| {
        let map = board(777);
        b.iter_batched(
            || PositionRollout::new(three_agents(), &map),
            |mut r| {
                black_box(r.run());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_selector_choose(c: &mut Criterion) {
    let map = board(1234);
    let ch = Character::new(Coord::new(2, 2));

    c.bench_function("selector.greedy.choose_direction", |b| {
        let mut s = GreedySelector::new();
        b.iter(|| black_box(s.choose_direction(&ch, &map)));
    });

    c.bench_function("selector.beam.choose_direction", |b| {
        let mut s = BeamSearchSelector::new(BeamConfig::default());
        b.iter(|| black_box(s.choose_direction(&ch, &map)));
    });
}

fn bench_annealing(c: &mut Criterion) {
    let map = board(5678);
    let cfg = AnnealingConfig {
        repeat: 100,
        ..AnnealingConfig::default()
    };
    c.bench_function("placement.annealing.optimize_100", |b| {
        b.iter_batched(
            || AnnealingPlacement::new(cfg, 9).expect("valid annealing benchmark config"),
            |mut p| {
                black_box(p.optimize(&map).expect("valid grid"));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    engine_core_benches,
    bench_simulate_one,
    bench_position_rollout,
    bench_selector_choose,
    bench_annealing
);
criterion_main!(engine_core_benches);

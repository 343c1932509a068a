// rust/engine/tests/placement_search.rs
#![forbid(unsafe_code)]

/**
 * Placement contracts and annealing search behavior.
 *
 * Every placement must hand back `character_num` fresh characters on
 * distinct in-bounds cells without touching the board. The annealing search
 * is additionally checked for seed determinism and for reporting a score
 * that a fresh rollout from its best coordinates reproduces.
 */
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tilegrid_engine::{
    AnnealingConfig, AnnealingPlacement, AnnealingStep, AnnealingTransition, Character,
    ConfigError, Coord, GridConfig, MapState, Placement, PositionRollout, RandomPlacement,
    acceptance_probability, characters_at, distinct_random_coords, redraw_one,
};

fn cfg() -> GridConfig {
    GridConfig::default()
}

fn quick() -> AnnealingConfig {
    AnnealingConfig {
        repeat: 200,
        ..AnnealingConfig::default()
    }
}

fn assert_valid_placement(chars: &[Character], g: &GridConfig) {
    assert_eq!(chars.len(), g.character_num);
    let mut seen = FxHashSet::default();
    for ch in chars {
        assert!(ch.coord().column() < g.columns);
        assert!(ch.coord().row() < g.rows);
        assert_eq!(ch.score(), 0);
        assert!(!ch.is_walking());
        assert!(seen.insert(ch.coord()), "duplicate start {:?}", ch.coord());
    }
}

// -----------------------------------------------------------------------------
// Annealing
// -----------------------------------------------------------------------------

#[test]
fn annealing_with_defaults_places_distinct_fresh_characters() {
    let map = MapState::random(cfg(), 1);
    let before = map.clone();
    let mut p = AnnealingPlacement::new(AnnealingConfig::default(), 7).unwrap();
    let chars = p.place(&map).unwrap();
    assert_valid_placement(&chars, &cfg());
    assert_eq!(map, before);

    let report = p.last_report().expect("report after place");
    assert_eq!(report.iterations, 1000);
    assert!(report.improvements >= 1);
    let coords: Vec<Coord> = chars.iter().map(Character::coord).collect();
    assert_eq!(coords, report.best_coords);
}

#[test]
fn reported_best_score_replays_exactly() {
    let map = MapState::random(cfg(), 42);
    let mut p = AnnealingPlacement::new(quick(), 3).unwrap();
    let report = p.optimize(&map).unwrap();

    let mut replay = PositionRollout::new(characters_at(&report.best_coords), &map);
    assert_eq!(replay.run(), report.best_score);
}

#[test]
fn best_score_is_at_least_the_first_candidate() {
    let map = MapState::filled(cfg(), 1);
    let mut p = AnnealingPlacement::new(quick(), 5).unwrap();
    let report = p.optimize(&map).unwrap();

    // The first candidate is the search's initial draw from the same seed.
    let mut rng = StdRng::seed_from_u64(5);
    let start = distinct_random_coords(&cfg(), 3, &mut rng);
    let start_score = PositionRollout::new(characters_at(&start), &map).run();

    assert!(report.best_score >= start_score);
    assert!(report.best_score <= u64::from(cfg().end_turn));
}

#[test]
fn annealing_is_seed_deterministic() {
    let map = MapState::random(cfg(), 8);
    let a = AnnealingPlacement::new(quick(), 99)
        .unwrap()
        .optimize(&map)
        .unwrap();
    let b = AnnealingPlacement::new(quick(), 99)
        .unwrap()
        .optimize(&map)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_repeat_returns_the_random_start() {
    let map = MapState::random(cfg(), 2);
    let cfg0 = AnnealingConfig {
        repeat: 0,
        ..AnnealingConfig::default()
    };
    let mut p = AnnealingPlacement::new(cfg0, 4).unwrap();
    let chars = p.place(&map).unwrap();
    assert_valid_placement(&chars, &cfg());

    let report = p.last_report().unwrap();
    assert_eq!(report.iterations, 0);
    assert_eq!(report.improvements, 0);
    assert_eq!(report.best_score, 0);

    // Same RNG stream as the search's initial draw.
    let mut rng = StdRng::seed_from_u64(4);
    let expected = distinct_random_coords(&cfg(), 3, &mut rng);
    assert_eq!(report.best_coords, expected);
}

#[test]
fn zero_cooling_horizon_is_rejected() {
    let bad = AnnealingConfig {
        simulate_number: 0,
        ..AnnealingConfig::default()
    };
    assert_eq!(
        AnnealingPlacement::new(bad, 1).err(),
        Some(ConfigError::ZeroCoolingHorizon)
    );
}

#[test]
fn too_many_characters_is_rejected() {
    let g = GridConfig {
        columns: 2,
        rows: 2,
        end_turn: 15,
        character_num: 4,
    };
    let map = MapState::filled(g, 1);
    let mut p = AnnealingPlacement::new(quick(), 1).unwrap();
    assert_eq!(
        p.place(&map),
        Err(ConfigError::TooManyCharacters {
            characters: 4,
            cells: 4
        })
    );
    assert!(p.last_report().is_none());
    assert!(RandomPlacement::new(1).place(&map).is_err());
}

/// Temperature so low that any regression is rejected and any tie accepted.
fn frozen() -> AnnealingConfig {
    AnnealingConfig {
        repeat: 200,
        simulate_number: 10000,
        start_temp: 1e-9,
        end_temp: 1e-9,
    }
}

/// `next` is `base` with only slot `iteration % k` moved to a fresh cell.
fn assert_redrawn_from(step: &AnnealingStep, next: &[Coord]) {
    let slot = step.iteration % step.base.len();
    assert_eq!(next.len(), step.base.len());
    for (j, (b, n)) in step.base.iter().zip(next).enumerate() {
        if j == slot {
            assert!(!step.base.contains(n), "slot {j} not redrawn: {next:?}");
        } else {
            assert_eq!(b, n, "slot {j} drifted from base at iteration {}", step.iteration);
        }
    }
}

#[test]
fn transition_classification() {
    use AnnealingTransition::*;
    assert_eq!(AnnealingTransition::classify(true, true), Improved);
    assert_eq!(AnnealingTransition::classify(true, false), Improved);
    assert_eq!(AnnealingTransition::classify(false, true), Forced);
    assert_eq!(AnnealingTransition::classify(false, false), Rejected);
}

#[test]
fn ties_are_always_accepted_on_an_empty_board() {
    // Every candidate scores 0: the first beats the -1 sentinel, every later
    // one ties the best and exp(0) = 1 beats any draw from [0, 1).
    let map = MapState::filled(cfg(), 0);
    let mut p = AnnealingPlacement::new(quick(), 17).unwrap();
    let report = p.optimize(&map).unwrap();
    assert_eq!(report.best_score, 0);
    assert_eq!(report.improvements, 1);
    assert_eq!(report.forced_moves, 199);
    assert_eq!(report.improvements + report.forced_moves, report.iterations);
}

#[test]
fn forced_moves_continue_from_the_candidate() {
    let map = MapState::filled(cfg(), 0);
    let mut p = AnnealingPlacement::new(quick(), 23).unwrap();
    let mut search = p.search(&map).unwrap();
    let mut forced_away_from_best = 0;

    while !search.is_finished() {
        let best: Option<Vec<Coord>> = search.best().map(|(_, c)| c.to_vec());
        let step = search.step().expect("not finished");
        if step.iteration == 0 {
            assert_eq!(step.transition, AnnealingTransition::Improved);
        } else {
            assert_eq!(step.transition, AnnealingTransition::Forced);
            if best.as_deref() != Some(step.candidate.as_slice()) {
                forced_away_from_best += 1;
            }
        }
        assert_eq!(step.base, step.candidate);
        assert_redrawn_from(&step, search.candidate());
    }

    // The walk leaves the first (and only) best immediately.
    assert!(forced_away_from_best >= 150);
    let (score, best) = search.best().unwrap();
    assert_eq!(score, 0);
    assert_eq!(best.len(), 3);
}

#[test]
fn rejections_restart_from_the_best() {
    let map = MapState::random(cfg(), 42);
    let mut p = AnnealingPlacement::new(frozen(), 8).unwrap();
    let mut search = p.search(&map).unwrap();
    let mut rejections = 0;

    while !search.is_finished() {
        let before: Option<(u64, Vec<Coord>)> = search.best().map(|(s, c)| (s, c.to_vec()));
        let step = search.step().expect("not finished");

        match (step.transition, &before) {
            (AnnealingTransition::Improved, prev) => {
                assert!(prev.as_ref().map_or(true, |(s, _)| step.score > *s));
                assert_eq!(step.base, step.candidate);
                assert_eq!(search.best().unwrap().1, step.candidate.as_slice());
            }
            (AnnealingTransition::Forced, Some((s, _))) => {
                assert_eq!(step.score, *s);
                assert_eq!(step.base, step.candidate);
            }
            (AnnealingTransition::Rejected, Some((s, best))) => {
                rejections += 1;
                assert!(step.score < *s);
                assert_eq!(&step.base, best);
                assert_ne!(step.base, step.candidate);
                assert_eq!(search.best().unwrap().1, best.as_slice());
            }
            (t, None) => panic!("{t:?} before any best"),
        }
        assert_redrawn_from(&step, search.candidate());
    }
    assert!(rejections > 0);
}

#[test]
fn stepping_by_hand_matches_optimize() {
    let map = MapState::random(cfg(), 13);
    let by_optimize = AnnealingPlacement::new(quick(), 5)
        .unwrap()
        .optimize(&map)
        .unwrap();

    let mut p = AnnealingPlacement::new(quick(), 5).unwrap();
    let mut search = p.search(&map).unwrap();
    let mut steps = 0;
    while search.step().is_some() {
        steps += 1;
    }
    assert_eq!(steps, 200);
    assert!(search.step().is_none());
    assert_eq!(search.finish(), by_optimize);
}

// -----------------------------------------------------------------------------
// Temperature and acceptance
// -----------------------------------------------------------------------------

#[test]
fn temperature_interpolates_over_the_cooling_horizon() {
    let c = AnnealingConfig::default();
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(close(c.temperature(0), 500.0));
    assert!(close(c.temperature(1000), 451.0));
    assert!(close(c.temperature(5000), 255.0));
    assert!(close(c.temperature(10000), 10.0));
    // Past the horizon the line keeps going.
    assert!(c.temperature(20000) < 0.0);
}

#[test]
fn acceptance_probability_shape() {
    // Ties are always accepted at positive temperature.
    assert_eq!(acceptance_probability(10.0, 10.0, 500.0), 1.0);
    assert!(acceptance_probability(10.0, 10.0, 500.0) > 0.999_999);
    assert!(acceptance_probability(11.0, 10.0, 1.0) > 1.0);

    let warm = acceptance_probability(5.0, 10.0, 500.0);
    let cold = acceptance_probability(5.0, 10.0, 10.0);
    assert!(warm < 1.0 && cold < warm);
    assert!((cold - (-0.5f64).exp()).abs() < 1e-12);

    // First iteration: best is -1, so any score is an improvement.
    assert!(acceptance_probability(0.0, -1.0, 500.0) > 1.0);
}

// -----------------------------------------------------------------------------
// Random placement and neighbourhood moves
// -----------------------------------------------------------------------------

#[test]
fn random_placement_is_valid_and_seeded() {
    let map = MapState::random(cfg(), 6);
    let a = RandomPlacement::new(12).place(&map).unwrap();
    let b = RandomPlacement::new(12).place(&map).unwrap();
    assert_valid_placement(&a, &cfg());
    assert_eq!(a, b);
}

#[test]
fn distinct_random_coords_fills_all_but_one_cell() {
    let g = GridConfig {
        columns: 3,
        rows: 3,
        end_turn: 15,
        character_num: 8,
    };
    let mut rng = StdRng::seed_from_u64(0);
    let coords = distinct_random_coords(&g, 8, &mut rng);
    let set: FxHashSet<Coord> = coords.iter().copied().collect();
    assert_eq!(set.len(), 8);
}

#[test]
fn redraw_one_moves_only_the_chosen_slot() {
    let mut rng = StdRng::seed_from_u64(31);
    let coords = vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
    for idx in 0..coords.len() {
        for _ in 0..20 {
            let next = redraw_one(&coords, idx, &cfg(), &mut rng);
            assert_eq!(next.len(), coords.len());
            for (j, (old, new)) in coords.iter().zip(&next).enumerate() {
                if j == idx {
                    assert!(!coords.contains(new));
                } else {
                    assert_eq!(old, new);
                }
            }
        }
    }
}

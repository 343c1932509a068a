// rust/engine/tests/grid_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the grid model.
 *
 * Invariants covered:
 * - `move_to` either stays on the grid (one step away) or reports why not.
 * - Cloned boards are isolated from the original.
 * - Collected cells never regenerate; turn and score never decrease.
 * - `is_done` matches its definition after every move and latches.
 */
use proptest::prelude::*;
use tilegrid_engine::{Character, Coord, DirectionType, GridConfig, MapState, MoveEngine, MoveError};

const DIRS: [DirectionType; 5] = [
    DirectionType::None,
    DirectionType::Up,
    DirectionType::Down,
    DirectionType::Left,
    DirectionType::Right,
];

proptest! {
    #[test]
    fn move_to_never_leaves_the_grid(
        columns in 1usize..9,
        rows in 1usize..9,
        c in 0usize..9,
        r in 0usize..9,
        d in 0usize..5,
    ) {
        prop_assume!(c < columns && r < rows);
        let cfg = GridConfig { columns, rows, end_turn: 15, character_num: 1 };
        let dir = DIRS[d];

        match Coord::new(c, r).move_to(dir, &cfg) {
            Ok(t) => {
                prop_assert!(t.column() < columns && t.row() < rows);
                let dist = t.column().abs_diff(c) + t.row().abs_diff(r);
                prop_assert_eq!(dist, 1);
            }
            Err(MoveError::OutOfBounds { column, row }) => {
                prop_assert!(
                    column < 0 || row < 0 || column >= columns as i64 || row >= rows as i64
                );
            }
            Err(MoveError::NoDirection) => prop_assert_eq!(dir, DirectionType::None),
        }
    }

    #[test]
    fn mutating_a_clone_leaves_the_original_alone(
        seed in any::<u64>(),
        script in proptest::collection::vec(0usize..4, 1..30),
    ) {
        let map = MapState::random(GridConfig::default(), seed);
        let before = map.clone();

        let mut branch = map.clone();
        let mut ch = Character::new(Coord::new(2, 2));
        for &d in &script {
            MoveEngine::simulate_one(&mut ch, &mut branch, DirectionType::ALL[d]);
        }

        prop_assert_eq!(&map, &before);
        prop_assert!(branch.turn() as usize <= script.len());
    }

    #[test]
    fn random_walk_respects_collection_invariants(
        seed in any::<u64>(),
        end_turn in 1u32..30,
        script in proptest::collection::vec(0usize..4, 1..60),
    ) {
        let cfg = GridConfig { end_turn, ..GridConfig::default() };
        let mut map = MapState::random(cfg, seed);
        let mut ch = Character::new(Coord::new(2, 2));
        map.clear_start(&ch);

        let mut collected = vec![ch.coord()];
        let mut was_done = map.is_done();

        for &d in &script {
            let snapshot = map.clone();
            let score_before = ch.score();

            let moved = MoveEngine::simulate_one(&mut ch, &mut map, DirectionType::ALL[d]);

            prop_assert!(map.turn() >= snapshot.turn());
            prop_assert!(ch.score() >= score_before);
            if moved {
                prop_assert_eq!(map.turn(), snapshot.turn() + 1);
                prop_assert_eq!(ch.score() - score_before, snapshot.point_at(ch.coord()));
                collected.push(ch.coord());
            } else {
                prop_assert_eq!(&map, &snapshot);
            }

            for c in &collected {
                prop_assert_eq!(map.point_at(*c), 0);
            }

            let expect_done = map.turn() >= end_turn || map.remaining_points() == 0;
            prop_assert_eq!(map.is_done(), expect_done);
            if was_done {
                prop_assert!(map.is_done());
            }
            was_done = map.is_done();
        }
    }
}

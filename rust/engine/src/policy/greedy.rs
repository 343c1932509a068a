// rust/engine/src/policy/greedy.rs
#![forbid(unsafe_code)]

use crate::engine::{Character, DirectionType, MapState, MoveEngine};

use super::base::MoveSelector;

/// One-step lookahead: the legal neighbour with the highest value.
///
/// Ties go to the earlier direction in UP, DOWN, LEFT, RIGHT order, so the
/// choice is a pure function of (position, board).
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        Self
    }

    /// Same as `choose_direction` without needing `&mut self`.
    pub fn best_direction(character: &Character, map: &MapState) -> DirectionType {
        let mut best: Option<(DirectionType, u32)> = None;
        for d in MoveEngine::legal_directions(character, map) {
            let p = MoveEngine::peek_point(character, map, d);
            match best {
                Some((_, bp)) if bp >= p => {}
                _ => best = Some((d, p)),
            }
        }
        best.map_or(DirectionType::None, |(d, _)| d)
    }
}

impl MoveSelector for GreedySelector {
    fn choose_direction(&mut self, character: &Character, map: &MapState) -> DirectionType {
        Self::best_direction(character, map)
    }
}

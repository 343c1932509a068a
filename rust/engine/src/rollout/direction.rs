// rust/engine/src/rollout/direction.rs
#![forbid(unsafe_code)]

use crate::engine::{Character, DirectionType, MapState, MoveEngine};

/**
 * Two-agent rollout: a primary character, an opponent and a private board.
 *
 * Score is the differential `primary - opponent`, the quantity a search over
 * the primary's moves maximizes. `Clone` branches the whole rollout.
 */
#[derive(Clone, Debug)]
pub struct DirectionRollout {
    character: Character,
    opponent: Character,
    map: MapState,
    /// First direction the primary actually moved in.
    first_direction: DirectionType,
    evaluated_score: i64,
}

impl DirectionRollout {
    pub fn new(character: &Character, opponent: &Character, map: &MapState) -> Self {
        Self {
            character: character.clone(),
            opponent: opponent.clone(),
            map: map.clone(),
            first_direction: DirectionType::None,
            evaluated_score: 0,
        }
    }

    /// Moves the primary only. Returns whether the move was legal.
    pub fn advance_one(&mut self, direction: DirectionType) -> bool {
        let moved = MoveEngine::simulate_one(&mut self.character, &mut self.map, direction);
        if moved && self.first_direction == DirectionType::None {
            self.first_direction = direction;
        }
        moved
    }

    /// Moves the opponent, for callers alternating turns.
    pub fn advance_opponent(&mut self, direction: DirectionType) -> bool {
        MoveEngine::simulate_one(&mut self.opponent, &mut self.map, direction)
    }

    pub fn is_done(&self) -> bool {
        self.map.is_done()
    }

    pub fn evaluate(&mut self) -> i64 {
        self.evaluated_score = i64::from(self.character.score()) - i64::from(self.opponent.score());
        self.evaluated_score
    }

    /// Last value computed by `evaluate` (0 before the first call).
    pub fn evaluated_score(&self) -> i64 {
        self.evaluated_score
    }

    pub fn first_direction(&self) -> DirectionType {
        self.first_direction
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn opponent(&self) -> &Character {
        &self.opponent
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }
}

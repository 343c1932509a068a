// rust/engine/src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::{Character, DirectionType, MapState, MoveEngine};

use super::base::MoveSelector;

pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn choose_direction(&mut self, character: &Character, map: &MapState) -> DirectionType {
        let legal = MoveEngine::legal_directions(character, map);
        legal
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DirectionType::None)
    }
}

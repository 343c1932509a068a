// rust/engine/src/rollout/position.rs
#![forbid(unsafe_code)]

use tracing::debug;

use crate::engine::{Character, Coord, MapState, MoveEngine};
use crate::policy::GreedySelector;

/**
 * Multi-agent rollout used to score a placement candidate.
 *
 * Keeps a pristine copy of the board it was built from; every `init`
 * restarts on a fresh clone of that copy, so candidates never inherit cells
 * collected by an earlier candidate. Agents move simultaneously under the
 * greedy selector.
 */
#[derive(Clone, Debug)]
pub struct PositionRollout {
    origin: MapState,
    map: MapState,
    characters: Vec<Character>,
    first_coords: Vec<Coord>,
    evaluated_score: Option<u64>,
    policy: GreedySelector,
}

impl PositionRollout {
    pub fn new(characters: Vec<Character>, map: &MapState) -> Self {
        let mut rollout = Self {
            origin: map.clone(),
            map: map.clone(),
            characters: Vec::new(),
            first_coords: Vec::new(),
            evaluated_score: None,
            policy: GreedySelector::new(),
        };
        rollout.init(characters);
        rollout
    }

    pub fn delete_all_characters(&mut self) {
        self.characters.clear();
    }

    /// Installs a new set of agents on a fresh board clone.
    pub fn init(&mut self, characters: Vec<Character>) {
        self.map = self.origin.clone();
        for ch in &characters {
            self.map.clear_start(ch);
        }
        self.first_coords = characters.iter().map(Character::coord).collect();
        self.characters = characters;
        self.evaluated_score = None;
    }

    /// One simultaneous move for every agent. Returns committed moves.
    pub fn tick(&mut self) -> usize {
        MoveEngine::simulate_all(&mut self.characters, &mut self.map, &mut self.policy)
    }

    pub fn is_done(&self) -> bool {
        self.map.is_done()
    }

    /// Ticks until the board is finished, then evaluates.
    ///
    /// A tick that commits nothing can never finish the board, so it ends the
    /// run early.
    pub fn run(&mut self) -> u64 {
        while !self.is_done() {
            if self.tick() == 0 {
                debug!(turn = self.map.turn(), "position rollout stalled");
                break;
            }
        }
        self.evaluate()
    }

    /// Total collected score across all characters.
    pub fn evaluate(&mut self) -> u64 {
        let total = self.characters.iter().map(|c| u64::from(c.score())).sum();
        self.evaluated_score = Some(total);
        total
    }

    pub fn evaluated_score(&self) -> Option<u64> {
        self.evaluated_score
    }

    /// Starting coordinates of the current agents, fixed at `init`.
    pub fn first_coords(&self) -> &[Coord] {
        &self.first_coords
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }
}

// rust/engine/src/engine/game.rs
#![forbid(unsafe_code)]

use crate::engine::character::Character;
use crate::engine::map_state::MapState;
use crate::engine::move_engine::{Animator, MoveEngine};
use crate::policy::MoveSelector;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepResult {
    /// Characters whose move was started this step.
    pub moves_started: usize,
    /// True once the board is finished (turn limit or nothing left).
    pub terminated: bool,
    /// Nothing moved and nothing ever will: no character has a legal
    /// direction, or the selector ran out of input. A step where the
    /// selector merely chose not to move is not a stall.
    pub stalled: bool,
}

/**
 * Live session: the authoritative board and the agents playing on it.
 *
 * Moves go through the live path (`MoveEngine::move_live`), so a presentation
 * layer can interpose its animation between intent and commit. Rollouts never
 * touch this state; they work on clones.
 */
#[derive(Clone, Debug)]
pub struct Game {
    pub map: MapState,
    pub characters: Vec<Character>,
}

impl Game {
    /// Start cells are cleared on entry.
    pub fn new(mut map: MapState, characters: Vec<Character>) -> Self {
        for ch in &characters {
            map.clear_start(ch);
        }
        Self { map, characters }
    }

    /// Asks `selector` for each character in order and starts its move.
    ///
    /// Characters act one after another, so with an immediate animator a later
    /// character already sees the cells collected earlier in the same step.
    pub fn step(
        &mut self,
        selector: &mut dyn MoveSelector,
        animator: &mut dyn Animator,
    ) -> StepResult {
        let Game { map, characters } = self;
        let mut moves_started = 0;
        for ch in characters.iter_mut() {
            if map.is_done() {
                break;
            }
            let direction = selector.choose_direction(ch, map);
            if MoveEngine::move_live(ch, map, direction, animator) {
                moves_started += 1;
            }
        }
        let terminated = map.is_done();
        let stuck = characters
            .iter()
            .all(|ch| MoveEngine::legal_directions(ch, map).is_empty());
        StepResult {
            moves_started,
            terminated,
            stalled: moves_started == 0 && !terminated && (stuck || selector.is_exhausted()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.map.is_done()
    }

    pub fn total_score(&self) -> u64 {
        self.characters.iter().map(|c| u64::from(c.score())).sum()
    }

    pub fn render_ascii(&self) -> String {
        self.map.render_ascii(&self.characters)
    }
}

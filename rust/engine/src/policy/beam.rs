// rust/engine/src/policy/beam.rs
#![forbid(unsafe_code)]

use crate::engine::{Character, DirectionType, MapState, MoveEngine};
use crate::rollout::DirectionRollout;

use super::base::MoveSelector;

/**
 * Beam configuration for the search selector.
 *
 * - `depth`: plies of the primary's own moves to expand.
 * - `width`: rollouts kept after each ply.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BeamConfig {
    pub depth: usize,
    pub width: usize,
}

impl BeamConfig {
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth: depth.max(1),
            width: width.max(1),
        }
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self::new(4, 8)
    }
}

/**
 * Deterministic top-N selection by score, highest first.
 *
 * Stable: among equal scores the earlier element survives, which keeps the
 * UP, DOWN, LEFT, RIGHT expansion order as the tie-break.
 */
pub(crate) fn prune_top_n<T>(xs: &mut Vec<T>, n: usize, score: impl Fn(&T) -> i64) {
    if xs.is_empty() {
        return;
    }
    xs.sort_by_key(|x| std::cmp::Reverse(score(x)));
    xs.truncate(n.max(1));
}

/// Beam search over the primary's move sequences.
///
/// Each candidate is a `DirectionRollout` branched by cloning; its score is
/// the differential against the opponent. Without an explicit opponent a
/// zero-score shadow of the primary is used, so the objective is the
/// primary's own gain.
pub struct BeamSearchSelector {
    cfg: BeamConfig,
    opponent: Option<Character>,
}

impl BeamSearchSelector {
    pub fn new(cfg: BeamConfig) -> Self {
        Self {
            cfg,
            opponent: None,
        }
    }

    pub fn with_opponent(mut self, opponent: Character) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn config(&self) -> BeamConfig {
        self.cfg
    }

    fn search(&self, character: &Character, map: &MapState) -> DirectionType {
        let shadow;
        let opponent = match &self.opponent {
            Some(o) => o,
            None => {
                shadow = Character::new(character.coord());
                &shadow
            }
        };

        let mut beam = vec![DirectionRollout::new(character, opponent, map)];

        for _ in 0..self.cfg.depth {
            let mut next = Vec::with_capacity(beam.len() * DirectionType::ALL.len());
            let mut expanded = false;

            for r in beam {
                if r.is_done() {
                    next.push(r);
                    continue;
                }
                for d in MoveEngine::legal_directions(r.character(), r.map()) {
                    let mut child = r.clone();
                    if child.advance_one(d) {
                        child.evaluate();
                        next.push(child);
                        expanded = true;
                    }
                }
            }

            prune_top_n(&mut next, self.cfg.width, DirectionRollout::evaluated_score);
            beam = next;
            if !expanded {
                break;
            }
        }

        let mut best: Option<&DirectionRollout> = None;
        for r in &beam {
            if best.map_or(true, |b| r.evaluated_score() > b.evaluated_score()) {
                best = Some(r);
            }
        }
        best.map_or(DirectionType::None, DirectionRollout::first_direction)
    }
}

impl MoveSelector for BeamSearchSelector {
    fn choose_direction(&mut self, character: &Character, map: &MapState) -> DirectionType {
        self.search(character, map)
    }
}

// rust/engine/src/engine/move_engine.rs
#![forbid(unsafe_code)]

use tracing::trace;

use crate::engine::character::Character;
use crate::engine::coord::Coord;
use crate::engine::direction::DirectionType;
use crate::engine::map_state::MapState;
use crate::policy::MoveSelector;

/// Presentation-side collaborator for the live move path.
///
/// `animate` plays a transition between two cells and must invoke
/// `on_complete` exactly once; state is committed only inside that callback.
/// Dropping the callback leaves the character walking.
pub trait Animator {
    fn animate(&mut self, from: Coord, to: Coord, on_complete: Box<dyn FnOnce() + '_>);
}

/// Completes every transition immediately (headless sessions, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimator;

impl Animator for InstantAnimator {
    fn animate(&mut self, _from: Coord, _to: Coord, on_complete: Box<dyn FnOnce() + '_>) {
        on_complete();
    }
}

/**
 * A started but not yet committed live move.
 *
 * Returned by `MoveEngine::begin_move` for presentation layers that finish
 * animations on their own schedule. `commit` consumes the token, so a move is
 * committed at most once.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "a pending move does nothing until committed"]
pub struct PendingMove {
    from: Coord,
    target: Coord,
    direction: DirectionType,
}

impl PendingMove {
    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn target(&self) -> Coord {
        self.target
    }

    pub fn direction(&self) -> DirectionType {
        self.direction
    }

    pub fn commit(self, character: &mut Character, map: &mut MapState) {
        character.stop_walk();
        map.advance(character, self.target);
        trace!(
            from = ?self.from,
            to = ?self.target,
            score = character.score(),
            turn = map.turn(),
            "live move committed"
        );
    }
}

/// Move orchestration. Stateless: every operation takes the state it touches.
///
/// Illegal directions (off-grid or NONE) are ignored silently in every path;
/// callers that care use `legal_directions` / `peek_point`.
pub struct MoveEngine;

impl MoveEngine {
    // -------------------------------------------------------------------------
    // Live path
    // -------------------------------------------------------------------------

    /// Precondition check + walk start. `None` means nothing happens this turn:
    /// the character is already walking or the direction is illegal.
    pub fn begin_move(
        character: &mut Character,
        map: &MapState,
        direction: DirectionType,
    ) -> Option<PendingMove> {
        if character.is_walking() {
            return None;
        }
        let from = character.coord();
        let target = from.move_to(direction, map.config()).ok()?;
        character.start_walk(target, direction);
        Some(PendingMove {
            from,
            target,
            direction,
        })
    }

    /// Starts a move and hands the commit to `animator`.
    ///
    /// Returns whether a move was started.
    pub fn move_live(
        character: &mut Character,
        map: &mut MapState,
        direction: DirectionType,
        animator: &mut dyn Animator,
    ) -> bool {
        let Some(pending) = Self::begin_move(character, map, direction) else {
            return false;
        };
        animator.animate(
            pending.from(),
            pending.target(),
            Box::new(move || pending.commit(character, map)),
        );
        true
    }

    // -------------------------------------------------------------------------
    // Simulation path (synchronous, no animation)
    // -------------------------------------------------------------------------

    /// Returns whether the move was committed.
    pub fn simulate_one(
        character: &mut Character,
        map: &mut MapState,
        direction: DirectionType,
    ) -> bool {
        let Ok(target) = character.coord().move_to(direction, map.config()) else {
            return false;
        };
        character.start_walk(target, direction);
        map.advance(character, target);
        character.stop_walk();
        true
    }

    /// One tick for every character.
    ///
    /// All directions and targets are computed from the pre-tick board before
    /// any commit. Two agents aiming at the same cell both commit; the first
    /// one in slice order collects its value. Agents without a legal target
    /// sit the tick out. Returns the number of committed moves.
    pub fn simulate_all(
        characters: &mut [Character],
        map: &mut MapState,
        selector: &mut dyn MoveSelector,
    ) -> usize {
        let plan: Vec<(usize, DirectionType, Coord)> = characters
            .iter()
            .enumerate()
            .filter_map(|(i, ch)| {
                let direction = selector.choose_direction(ch, map);
                let target = ch.coord().move_to(direction, map.config()).ok()?;
                Some((i, direction, target))
            })
            .collect();

        for &(i, direction, target) in &plan {
            let ch = &mut characters[i];
            ch.start_walk(target, direction);
            map.advance(ch, target);
            ch.stop_walk();
        }
        plan.len()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Directions whose target stays on the grid, in `DirectionType::ALL` order.
    /// Other agents are not obstacles.
    pub fn legal_directions(character: &Character, map: &MapState) -> Vec<DirectionType> {
        DirectionType::ALL
            .into_iter()
            .filter(|&d| character.coord().move_to(d, map.config()).is_ok())
            .collect()
    }

    /// Value one step away in `direction`; 0 when that step is illegal.
    pub fn peek_point(character: &Character, map: &MapState, direction: DirectionType) -> u32 {
        match character.coord().move_to(direction, map.config()) {
            Ok(target) => map.point_at(target),
            Err(_) => 0,
        }
    }
}

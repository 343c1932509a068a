// rust/engine/src/engine/character.rs
#![forbid(unsafe_code)]

use crate::engine::coord::Coord;
use crate::engine::direction::DirectionType;

/**
 * One agent on the board.
 *
 * `start_walk` only records intent; the authoritative position and score
 * change when the owning `MapState` commits the move. `Clone` copies every
 * field, so rollout copies never alias the character they came from.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Character {
    coord: Coord,
    score: u32,
    walking: bool,
    direction: DirectionType,
    target: Option<Coord>,
}

impl Character {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            score: 0,
            walking: false,
            direction: DirectionType::None,
            target: None,
        }
    }

    /// Restores a character with an already accumulated score.
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// Direction of the most recent walk (NONE before the first one).
    #[inline]
    pub fn direction(&self) -> DirectionType {
        self.direction
    }

    /// Destination of the walk in progress, if any.
    #[inline]
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    pub fn start_walk(&mut self, target: Coord, direction: DirectionType) {
        self.target = Some(target);
        self.direction = direction;
        self.walking = true;
    }

    pub fn stop_walk(&mut self) {
        self.walking = false;
        self.target = None;
    }

    /// Commit hook for `MapState::advance`: position moves, score only grows.
    pub(crate) fn arrive(&mut self, coord: Coord, gained: u32) {
        self.coord = coord;
        self.score = self.score.saturating_add(gained);
    }
}

// rust/engine/src/placement/base.rs
#![forbid(unsafe_code)]

use crate::engine::{Character, ConfigError, Coord, MapState};

/// Chooses starting cells for `map.config().character_num` agents.
///
/// The returned characters are fresh (score 0, not walking) and sit on
/// mutually distinct in-bounds cells. Only an invalid grid configuration
/// fails; the board itself is read, never modified.
pub trait Placement {
    fn place(&mut self, map: &MapState) -> Result<Vec<Character>, ConfigError>;
}

pub fn characters_at(coords: &[Coord]) -> Vec<Character> {
    coords.iter().copied().map(Character::new).collect()
}

// rust/engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::engine::{Character, DirectionType, MapState};

/// Selector chooses a direction for `character` on the current board.
///
/// Returns `DirectionType::None` when it has nothing to play. A returned
/// direction may still be illegal (manual input); the move engine ignores it.
///
/// Object-safe so it can be used as `Box<dyn MoveSelector>`.
pub trait MoveSelector {
    fn choose_direction(&mut self, character: &Character, map: &MapState) -> DirectionType;

    /// True once the selector can never produce another direction
    /// (a scripted input that ran dry).
    fn is_exhausted(&self) -> bool {
        false
    }
}

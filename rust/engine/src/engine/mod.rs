// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod character;
mod config;
mod constants;
mod coord;
mod direction;
mod error;
mod game;
mod map_state;
mod move_engine;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use character::Character;
pub use config::GridConfig;
pub use constants::{
    DEFAULT_CHARACTER_NUM, DEFAULT_COLUMNS, DEFAULT_END_TURN, DEFAULT_ROWS, MAX_CELL_POINT,
};
pub use coord::Coord;
pub use direction::DirectionType;
pub use error::{ConfigError, MoveError};
pub use game::{Game, StepResult};
pub use map_state::MapState;
pub use move_engine::{Animator, InstantAnimator, MoveEngine, PendingMove};

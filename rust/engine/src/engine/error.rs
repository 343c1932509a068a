// rust/engine/src/engine/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

/// Why a coordinate could not be offset in a direction.
///
/// The move engine treats both variants as "no legal move": callers that need
/// to know legality ask `MoveEngine::legal_directions` instead of matching here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("target ({column}, {row}) lies outside the grid")]
    OutOfBounds { column: i64, row: i64 },
    #[error("direction NONE has no unit offset")]
    NoDirection,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("end_turn must be positive")]
    ZeroEndTurn,
    #[error("character_num must be positive")]
    NoCharacters,
    #[error("cannot place {characters} characters on {cells} cells without collisions")]
    TooManyCharacters { characters: usize, cells: usize },
    #[error("point vector has {got} entries, grid needs {expected}")]
    PointCount { expected: usize, got: usize },
    #[error("simulate_number (cooling horizon) must be positive")]
    ZeroCoolingHorizon,
}

// rust/engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const DEFAULT_COLUMNS: usize = 5;
pub const DEFAULT_ROWS: usize = 5;

/// Turn counter value at which a board is finished.
///
/// The counter advances once per committed move, so with several agents a
/// single tick consumes several turns.
pub const DEFAULT_END_TURN: u32 = 15;

pub const DEFAULT_CHARACTER_NUM: usize = 3;

/// Cell values drawn by `MapState::random` lie in `0..=MAX_CELL_POINT`.
pub const MAX_CELL_POINT: u32 = 9;

// rust/engine/src/engine/config.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{
    DEFAULT_CHARACTER_NUM, DEFAULT_COLUMNS, DEFAULT_END_TURN, DEFAULT_ROWS,
};
use crate::engine::error::ConfigError;

/**
 * Board parameters shared by every component.
 *
 * Copied by value into `MapState` so clones carry their own bounds; nothing
 * reads grid size from a global.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub end_turn: u32,
    /// Agents placed by the placement strategies.
    pub character_num: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            end_turn: DEFAULT_END_TURN,
            character_num: DEFAULT_CHARACTER_NUM,
        }
    }
}

impl GridConfig {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Rejects boards the placement search could never fill.
    ///
    /// Candidate generation redraws until it finds a cell no agent occupies, so
    /// `character_num` must stay strictly below the cell count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.end_turn == 0 {
            return Err(ConfigError::ZeroEndTurn);
        }
        if self.character_num == 0 {
            return Err(ConfigError::NoCharacters);
        }
        if self.character_num >= self.cell_count() {
            return Err(ConfigError::TooManyCharacters {
                characters: self.character_num,
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}

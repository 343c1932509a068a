// rust/engine/src/engine/coord.rs
#![forbid(unsafe_code)]

use rand::Rng;

use crate::engine::config::GridConfig;
use crate::engine::direction::DirectionType;
use crate::engine::error::MoveError;

/// Grid cell address. Immutable; equality and hashing are structural.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Coord {
    column: usize,
    row: usize,
}

impl Coord {
    /// Callers are responsible for `column < cfg.columns` and `row < cfg.rows`.
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Bounds-checked constructor.
    pub fn checked(cfg: &GridConfig, column: i64, row: i64) -> Result<Self, MoveError> {
        if column < 0 || row < 0 || column >= cfg.columns as i64 || row >= cfg.rows as i64 {
            return Err(MoveError::OutOfBounds { column, row });
        }
        Ok(Self::new(column as usize, row as usize))
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Row-major index into a `cfg.columns`-wide cell vector.
    #[inline]
    pub fn index(&self, cfg: &GridConfig) -> usize {
        self.row * cfg.columns + self.column
    }

    /// Neighbouring cell in `direction`.
    ///
    /// This is the only place grid bounds are enforced.
    pub fn move_to(&self, direction: DirectionType, cfg: &GridConfig) -> Result<Self, MoveError> {
        let (dc, dr) = direction.offset().ok_or(MoveError::NoDirection)?;
        Self::checked(cfg, self.column as i64 + dc, self.row as i64 + dr)
    }

    /// Uniform draw over the whole grid.
    pub fn random<R: Rng + ?Sized>(cfg: &GridConfig, rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..cfg.columns), rng.gen_range(0..cfg.rows))
    }

    pub fn all(cfg: &GridConfig) -> impl Iterator<Item = Coord> + '_ {
        (0..cfg.rows).flat_map(move |r| (0..cfg.columns).map(move |c| Coord::new(c, r)))
    }
}

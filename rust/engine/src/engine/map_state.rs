// rust/engine/src/engine/map_state.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::character::Character;
use crate::engine::config::GridConfig;
use crate::engine::constants::MAX_CELL_POINT;
use crate::engine::coord::Coord;
use crate::engine::error::ConfigError;

/**
 * Remaining cell values plus the turn counter.
 *
 * Invariants:
 * - `turn` never decreases.
 * - A zeroed cell stays zero for the lifetime of this value.
 *
 * Every field is owned, so `clone()` is a total deep copy: rollouts mutate
 * their copy without touching the authoritative board.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MapState {
    cfg: GridConfig,
    /// Row-major, `cfg.columns` wide.
    points: Vec<u32>,
    turn: u32,
}

impl MapState {
    pub fn new(cfg: GridConfig, points: Vec<u32>) -> Result<Self, ConfigError> {
        if points.len() != cfg.cell_count() {
            return Err(ConfigError::PointCount {
                expected: cfg.cell_count(),
                got: points.len(),
            });
        }
        Ok(Self {
            cfg,
            points,
            turn: 0,
        })
    }

    /// Every cell holds `value`.
    pub fn filled(cfg: GridConfig, value: u32) -> Self {
        Self {
            cfg,
            points: vec![value; cfg.cell_count()],
            turn: 0,
        }
    }

    /// Values drawn uniformly from `0..=MAX_CELL_POINT`, reproducible per seed.
    pub fn random(cfg: GridConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..cfg.cell_count())
            .map(|_| rng.gen_range(0..=MAX_CELL_POINT))
            .collect();
        Self {
            cfg,
            points,
            turn: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.cfg
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current value at `coord`; zero once collected.
    #[inline]
    pub fn point_at(&self, coord: Coord) -> u32 {
        self.points[coord.index(&self.cfg)]
    }

    pub fn remaining_points(&self) -> u64 {
        self.points.iter().map(|&p| u64::from(p)).sum()
    }

    /// Commits a move: the character lands on `coord`, collects the cell and
    /// the turn counter advances.
    ///
    /// `coord` must already be validated (see `Coord::move_to`).
    pub fn advance(&mut self, character: &mut Character, coord: Coord) {
        let idx = coord.index(&self.cfg);
        let gained = self.points[idx];
        character.arrive(coord, gained);
        self.points[idx] = 0;
        self.turn += 1;
    }

    /// Zeroes the cell a character starts on. No score, no turn.
    pub fn clear_start(&mut self, character: &Character) {
        let idx = character.coord().index(&self.cfg);
        self.points[idx] = 0;
    }

    pub fn is_done(&self) -> bool {
        self.turn >= self.cfg.end_turn || self.points.iter().all(|&p| p == 0)
    }

    /// Board with characters as `A`, `B`, ... and collected cells as `.`,
    /// followed by a status line. Each score is tagged with the character's
    /// last heading (`.` before its first move).
    pub fn render_ascii(&self, characters: &[Character]) -> String {
        let mut s = String::new();
        let border = format!("+{}+\n", "-".repeat(self.cfg.columns * 2));
        s.push_str(&border);
        for r in 0..self.cfg.rows {
            s.push('|');
            for c in 0..self.cfg.columns {
                let here = Coord::new(c, r);
                match characters.iter().position(|ch| ch.coord() == here) {
                    Some(i) => s.push((b'A' + (i % 26) as u8) as char),
                    None => match self.point_at(here) {
                        0 => s.push('.'),
                        p => s.push_str(&p.min(9).to_string()),
                    },
                }
                s.push(' ');
            }
            s.push_str("|\n");
        }
        s.push_str(&border);
        let scores: Vec<String> = characters
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                format!(
                    "{}{}={}",
                    (b'A' + (i % 26) as u8) as char,
                    ch.direction().glyph(),
                    ch.score()
                )
            })
            .collect();
        s.push_str(&format!(
            "turn={}/{} remaining={} scores=[{}] done={}\n",
            self.turn,
            self.cfg.end_turn,
            self.remaining_points(),
            scores.join(" "),
            self.is_done()
        ));
        s
    }
}

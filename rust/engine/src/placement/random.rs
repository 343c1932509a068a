// rust/engine/src/placement/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;
use rustc_hash::FxHashSet;

use crate::engine::{Character, ConfigError, Coord, GridConfig, MapState};

use super::base::{Placement, characters_at};

/// `n` mutually distinct cells by rejection sampling.
///
/// Requires `n < cfg.cell_count()` (see `GridConfig::validate`).
pub fn distinct_random_coords<R: Rng + ?Sized>(cfg: &GridConfig, n: usize, rng: &mut R) -> Vec<Coord> {
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let c = Coord::random(cfg, rng);
        if seen.insert(c) {
            out.push(c);
        }
    }
    out
}

/// Copy of `coords` with slot `idx` replaced by a cell none of them occupies.
///
/// The replaced slot's own cell counts as occupied, so the result always
/// differs from the input.
pub fn redraw_one<R: Rng + ?Sized>(coords: &[Coord], idx: usize, cfg: &GridConfig, rng: &mut R) -> Vec<Coord> {
    let mut next = coords.to_vec();
    let occupied: FxHashSet<Coord> = coords.iter().copied().collect();
    let fresh = loop {
        let c = Coord::random(cfg, rng);
        if !occupied.contains(&c) {
            break c;
        }
    };
    next[idx] = fresh;
    next
}

pub struct RandomPlacement {
    rng: StdRng,
}

impl RandomPlacement {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Placement for RandomPlacement {
    fn place(&mut self, map: &MapState) -> Result<Vec<Character>, ConfigError> {
        let cfg = map.config();
        cfg.validate()?;
        let coords = distinct_random_coords(cfg, cfg.character_num, &mut self.rng);
        Ok(characters_at(&coords))
    }
}

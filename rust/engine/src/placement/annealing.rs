// rust/engine/src/placement/annealing.rs
#![forbid(unsafe_code)]

/*
Simulated annealing over starting cells
---------------------------------------

State: one coordinate per agent. Objective: total score collected when the
agents play the board to completion under the greedy selector
(`PositionRollout::run`).

Per iteration i:
- score the current candidate;
- temp = start_temp + (end_temp - start_temp) * (i / simulate_number);
- p = exp((candidate - best) / temp), accepted when p > U[0,1);
- a strict improvement becomes the new best;
- the next candidate is the best coordinates (after an improvement or a
  rejection) or the candidate's own coordinates (after a forced acceptance),
  with agent `i mod K` moved to a random unoccupied cell.

`simulate_number` is a cooling horizon independent of `repeat`. With the
defaults (1000 vs 10000) the temperature only falls from 500 to about 451;
if `repeat` exceeds the horizon the temperature crosses `end_temp` and may
reach zero or go negative. The arithmetic is kept as is.
*/

use rand::prelude::*;
use tracing::{debug, info};

use crate::engine::{Character, ConfigError, Coord, GridConfig, MapState};
use crate::rollout::PositionRollout;

use super::base::{Placement, characters_at};
use super::random::{distinct_random_coords, redraw_one};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnealingConfig {
    /// Candidates evaluated.
    pub repeat: usize,
    /// Cooling horizon used in the temperature interpolation.
    pub simulate_number: usize,
    pub start_temp: f64,
    pub end_temp: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            repeat: 1000,
            simulate_number: 10000,
            start_temp: 500.0,
            end_temp: 10.0,
        }
    }
}

impl AnnealingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulate_number == 0 {
            return Err(ConfigError::ZeroCoolingHorizon);
        }
        Ok(())
    }

    #[inline]
    pub fn temperature(&self, i: usize) -> f64 {
        self.start_temp
            + (self.end_temp - self.start_temp) * (i as f64 / self.simulate_number as f64)
    }
}

/// `exp((candidate - best) / temp)`.
///
/// At least 1 for any candidate not worse than the best at positive
/// temperature; NaN (never accepted) for a tie at zero temperature.
#[inline]
pub fn acceptance_probability(candidate: f64, best: f64, temp: f64) -> f64 {
    ((candidate - best) / temp).exp()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingReport {
    pub best_score: u64,
    pub best_coords: Vec<Coord>,
    pub iterations: usize,
    /// Iterations whose candidate beat the best so far.
    pub improvements: usize,
    /// Non-improving candidates kept as the working point.
    pub forced_moves: usize,
}

/// How one iteration judged its candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnnealingTransition {
    /// Strictly beat the best so far; it becomes the best and the working point.
    Improved,
    /// Not better but accepted; the next candidate is derived from it.
    Forced,
    /// Not better and not accepted; the next candidate is derived from the best.
    Rejected,
}

impl AnnealingTransition {
    /// Improvement wins over the acceptance draw.
    pub fn classify(improved: bool, accepted: bool) -> Self {
        if improved {
            AnnealingTransition::Improved
        } else if accepted {
            AnnealingTransition::Forced
        } else {
            AnnealingTransition::Rejected
        }
    }
}

/// Outcome of a single `AnnealingSearch::step`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingStep {
    pub iteration: usize,
    pub temp: f64,
    pub score: u64,
    /// Coordinates that were scored.
    pub candidate: Vec<Coord>,
    pub transition: AnnealingTransition,
    /// Working point the next candidate was redrawn from.
    pub base: Vec<Coord>,
}

/**
 * A running annealing search, advanced one candidate at a time.
 *
 * Borrows the placement's RNG, so driving a search by hand and calling
 * `AnnealingPlacement::optimize` consume the same stream.
 */
pub struct AnnealingSearch<'a> {
    cfg: AnnealingConfig,
    grid: GridConfig,
    rng: &'a mut StdRng,
    rollout: PositionRollout,
    initial: Vec<Coord>,
    best: Option<(u64, Vec<Coord>)>,
    iteration: usize,
    improvements: usize,
    forced_moves: usize,
}

impl AnnealingSearch<'_> {
    /// Coordinates the next `step` will score.
    pub fn candidate(&self) -> &[Coord] {
        self.rollout.first_coords()
    }

    pub fn best(&self) -> Option<(u64, &[Coord])> {
        self.best.as_ref().map(|(s, c)| (*s, c.as_slice()))
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.cfg.repeat
    }

    /// Scores the current candidate, judges it and installs the next one.
    /// `None` once `repeat` candidates were evaluated.
    pub fn step(&mut self) -> Option<AnnealingStep> {
        if self.is_finished() {
            return None;
        }
        let i = self.iteration;
        let k = self.grid.character_num;

        let score = self.rollout.run();
        let candidate = self.rollout.first_coords().to_vec();

        let temp = self.cfg.temperature(i);
        let best_score = self.best.as_ref().map_or(-1.0, |(s, _)| *s as f64);
        let probability = acceptance_probability(score as f64, best_score, temp);
        let accepted = probability > self.rng.gen::<f64>();
        let improved = self.best.as_ref().map_or(true, |(s, _)| score > *s);
        let transition = AnnealingTransition::classify(improved, accepted);

        let base = match transition {
            AnnealingTransition::Improved => {
                self.improvements += 1;
                self.best = Some((score, candidate.clone()));
                candidate.clone()
            }
            AnnealingTransition::Forced => {
                self.forced_moves += 1;
                candidate.clone()
            }
            AnnealingTransition::Rejected => self
                .best
                .as_ref()
                .map(|(_, c)| c.clone())
                .unwrap_or_default(),
        };

        debug!(
            iteration = i,
            temp,
            score,
            best = self.best.as_ref().map_or(0, |(s, _)| *s),
            ?transition,
            "annealing step"
        );

        let next = redraw_one(&base, i % k, &self.grid, &mut *self.rng);
        self.rollout.delete_all_characters();
        self.rollout.init(characters_at(&next));
        self.iteration += 1;

        Some(AnnealingStep {
            iteration: i,
            temp,
            score,
            candidate,
            transition,
            base,
        })
    }

    /// Report over the iterations run so far. Without any, the random start
    /// is the answer with score 0.
    pub fn finish(mut self) -> AnnealingReport {
        self.rollout.delete_all_characters();
        let (best_score, best_coords) = self.best.unwrap_or((0, self.initial));
        AnnealingReport {
            best_score,
            best_coords,
            iterations: self.iteration,
            improvements: self.improvements,
            forced_moves: self.forced_moves,
        }
    }
}

pub struct AnnealingPlacement {
    cfg: AnnealingConfig,
    rng: StdRng,
    last_report: Option<AnnealingReport>,
}

impl AnnealingPlacement {
    pub fn new(cfg: AnnealingConfig, seed: u64) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            rng: StdRng::seed_from_u64(seed),
            last_report: None,
        })
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.cfg
    }

    /// Report of the most recent `place`/`optimize` call.
    pub fn last_report(&self) -> Option<&AnnealingReport> {
        self.last_report.as_ref()
    }

    /// Draws a random start and returns a search positioned before its first
    /// iteration. Works on clones of `map`.
    pub fn search(&mut self, map: &MapState) -> Result<AnnealingSearch<'_>, ConfigError> {
        let grid = *map.config();
        grid.validate()?;
        let initial = distinct_random_coords(&grid, grid.character_num, &mut self.rng);
        let rollout = PositionRollout::new(characters_at(&initial), map);
        Ok(AnnealingSearch {
            cfg: self.cfg,
            grid,
            rng: &mut self.rng,
            rollout,
            initial,
            best: None,
            iteration: 0,
            improvements: 0,
            forced_moves: 0,
        })
    }

    /// Runs the full search on clones of `map`; `map` itself is untouched.
    pub fn optimize(&mut self, map: &MapState) -> Result<AnnealingReport, ConfigError> {
        let mut search = self.search(map)?;
        while search.step().is_some() {}
        let report = search.finish();
        info!(
            best_score = report.best_score,
            coords = ?report.best_coords,
            improvements = report.improvements,
            forced_moves = report.forced_moves,
            "annealing placement finished"
        );
        Ok(report)
    }
}

impl Placement for AnnealingPlacement {
    fn place(&mut self, map: &MapState) -> Result<Vec<Character>, ConfigError> {
        let report = self.optimize(map)?;
        let characters = characters_at(&report.best_coords);
        self.last_report = Some(report);
        Ok(characters)
    }
}

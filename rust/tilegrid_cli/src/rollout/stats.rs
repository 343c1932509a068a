// src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub episodes_finished: u64,
    /// Episodes that ended because nobody could move (e.g. a manual script ran dry).
    pub episodes_stalled: u64,

    pub ticks_done: u64,
    pub moves_done: u64,

    pub sum_score: u64,
    pub max_score: u64,
    pub min_score: u64,

    pub sum_ticks: u64,
    pub sum_collect_ratio: f64,

    // annealing bookkeeping (zero for random placement)
    pub sum_placement_score: u64,
    pub sum_improvements: u64,
    pub sum_forced_moves: u64,

    // internal
    ep_ticks: u64,
    t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            episodes_stalled: 0,
            ticks_done: 0,
            moves_done: 0,
            sum_score: 0,
            max_score: 0,
            min_score: u64::MAX,
            sum_ticks: 0,
            sum_collect_ratio: 0.0,
            sum_placement_score: 0,
            sum_improvements: 0,
            sum_forced_moves: 0,
            ep_ticks: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per session step.
    pub fn on_tick(&mut self, moves_started: usize) {
        self.ticks_done += 1;
        self.ep_ticks += 1;
        self.moves_done += moves_started as u64;
    }

    /// Call when an episode ends, before building the next board.
    ///
    /// `initial_points` is the board value after start cells were cleared.
    pub fn on_episode_end(&mut self, score: u64, initial_points: u64, stalled: bool) {
        self.episodes_finished += 1;
        if stalled {
            self.episodes_stalled += 1;
        }

        self.sum_score += score;
        self.max_score = self.max_score.max(score);
        self.min_score = self.min_score.min(score);

        self.sum_ticks += self.ep_ticks;
        self.ep_ticks = 0;

        if initial_points > 0 {
            self.sum_collect_ratio += score as f64 / initial_points as f64;
        }
    }

    pub fn on_placement(&mut self, predicted_score: u64, improvements: usize, forced_moves: usize) {
        self.sum_placement_score += predicted_score;
        self.sum_improvements += improvements as u64;
        self.sum_forced_moves += forced_moves as u64;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    fn per_episode(&self, total: f64) -> f64 {
        if self.episodes_finished > 0 {
            total / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn episodes_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.episodes_finished as f64 / dt
        } else {
            0.0
        }
    }

    pub fn moves_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.moves_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_score(&self) -> f64 {
        self.per_episode(self.sum_score as f64)
    }

    pub fn avg_ticks(&self) -> f64 {
        self.per_episode(self.sum_ticks as f64)
    }

    pub fn avg_collect_ratio(&self) -> f64 {
        self.per_episode(self.sum_collect_ratio)
    }

    pub fn avg_placement_score(&self) -> f64 {
        self.per_episode(self.sum_placement_score as f64)
    }

    /// `min_score` with the "no episode yet" sentinel mapped to 0.
    pub fn min_score_or_zero(&self) -> u64 {
        if self.episodes_finished > 0 {
            self.min_score
        } else {
            0
        }
    }

    pub fn live_msg(&self) -> String {
        format!(
            "eps={} eps/s={:.2} avgScore={:.2} max={} min={} collect={:.3} ticks={:.1}",
            self.episodes_finished,
            self.episodes_per_sec(),
            self.avg_score(),
            self.max_score,
            self.min_score_or_zero(),
            self.avg_collect_ratio(),
            self.avg_ticks(),
        )
    }

    pub fn final_report(&self, selector_name: &str, placement_name: &str) -> FinalReport {
        FinalReport {
            selector: selector_name.to_string(),
            placement: placement_name.to_string(),

            episodes_finished: self.episodes_finished,
            episodes_stalled: self.episodes_stalled,
            elapsed_s: self.elapsed_secs(),
            episodes_per_s: self.episodes_per_sec(),

            moves_done: self.moves_done,
            avg_ticks: self.avg_ticks(),

            total_score: self.sum_score,
            avg_score: self.avg_score(),
            max_score: self.max_score,
            min_score: self.min_score_or_zero(),
            avg_collect_ratio: self.avg_collect_ratio(),

            avg_placement_score: self.avg_placement_score(),
            total_improvements: self.sum_improvements,
            total_forced_moves: self.sum_forced_moves,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub selector: String,
    pub placement: String,

    pub episodes_finished: u64,
    pub episodes_stalled: u64,
    pub elapsed_s: f64,
    pub episodes_per_s: f64,

    pub moves_done: u64,
    pub avg_ticks: f64,

    pub total_score: u64,
    pub avg_score: f64,
    pub max_score: u64,
    pub min_score: u64,
    pub avg_collect_ratio: f64,

    /// Rollout score the placement search predicted (simultaneous greedy play).
    pub avg_placement_score: f64,
    pub total_improvements: u64,
    pub total_forced_moves: u64,
}

// src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use tilegrid_engine::engine::{Character, Game, GridConfig, InstantAnimator, MapState};
use tilegrid_engine::placement::{AnnealingPlacement, AnnealingReport, Placement, RandomPlacement};
use tilegrid_engine::policy::MoveSelector;

use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};

/// Placement strategy chosen on the command line.
pub enum Placer {
    Random(RandomPlacement),
    Annealing(AnnealingPlacement),
}

impl Placer {
    pub fn name(&self) -> &'static str {
        match self {
            Placer::Random(_) => "random",
            Placer::Annealing(_) => "annealing",
        }
    }

    fn place(&mut self, map: &MapState) -> anyhow::Result<(Vec<Character>, Option<AnnealingReport>)> {
        match self {
            Placer::Random(p) => Ok((p.place(map)?, None)),
            Placer::Annealing(p) => {
                let characters = p.place(map)?;
                Ok((characters, p.last_report().cloned()))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Boards to play.
    pub episodes: u64,
    /// Base seed; each board uses base_seed + episode_id.
    pub base_seed: u64,
    pub grid: GridConfig,

    /// Used only for the final report string.
    pub selector_name: String,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N episodes (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every step; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,
}

pub struct Runner {
    cfg: RunnerConfig,
    placer: Placer,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, placer: Placer, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, placer, sink }
    }

    pub fn run(&mut self, selector: &mut dyn MoveSelector) -> anyhow::Result<FinalReport> {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.episodes);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>7}/{len:<7}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .context("invalid progress bar template")?
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();
        let mut animator = InstantAnimator;

        for episode_id in 0..cfg.episodes {
            // ------------------------------------------------------------
            // Board + placement.
            // ------------------------------------------------------------
            let map = MapState::random(cfg.grid, cfg.base_seed.wrapping_add(episode_id));
            let (characters, report) = self
                .placer
                .place(&map)
                .with_context(|| format!("placement failed on episode {episode_id}"))?;
            if let Some(r) = &report {
                stats.on_placement(r.best_score, r.improvements, r.forced_moves);
            }

            let mut game = Game::new(map, characters);
            let initial_points = game.map.remaining_points();

            if cfg.render_ms.is_some() {
                println!("=== episode {} ({}) ===", episode_id, self.placer.name());
                print!("{}", game.render_ascii());
            }

            // ------------------------------------------------------------
            // Play until the board is finished.
            // ------------------------------------------------------------
            let mut stalled = false;
            while !game.is_done() {
                let r = game.step(selector, &mut animator);
                if r.stalled {
                    warn!(episode = episode_id, turn = game.map.turn(), "no further moves possible; ending episode");
                    stalled = true;
                    break;
                }
                // A tick without moves (manual "no input") still counts as a tick.
                stats.on_tick(r.moves_started);

                if let Some(ms) = cfg.render_ms {
                    println!("tick={} turn={}", stats.ticks_done, game.map.turn());
                    print!("{}", game.render_ascii());
                    if ms > 0 {
                        std::thread::sleep(Duration::from_millis(ms));
                    }
                }
            }

            let score = game.total_score();
            debug!(episode = episode_id, score, initial_points, stalled, "episode finished");
            stats.on_episode_end(score, initial_points, stalled);

            if let Some(ref pb) = pb {
                pb.inc(1);
                pb.set_message(stats.live_msg());
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.episodes_finished % cfg.report_every == 0)
            {
                let row = ReportRow {
                    episode: stats.episodes_finished,
                    episodes_total: cfg.episodes,
                    eps: stats.episodes_per_sec(),
                    mps: stats.moves_per_sec(),
                    avg_score: stats.avg_score(),
                    max_score: stats.max_score,
                    min_score: stats.min_score_or_zero(),
                    avg_collect_ratio: stats.avg_collect_ratio(),
                    avg_ticks: stats.avg_ticks(),
                    stalled: stats.episodes_stalled,
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(&cfg.selector_name, self.placer.name()))
    }
}

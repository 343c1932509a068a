// src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::rollout::runner::Placer;
use crate::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};
use tilegrid_engine::{
    AnnealingConfig, AnnealingPlacement, BeamConfig, GridConfig, InputProvider, RandomPlacement,
    ScriptedInput, SelectorKind, SelectorOptions, build_selector,
};

#[derive(Parser, Debug)]
#[command(name = "tilegrid_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Boards to play.
    #[arg(long, default_value_t = 20)]
    episodes: u64,

    /// Base RNG seed (boards use base_seed + episode_id). If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Selector: greedy | random | beam | manual
    #[arg(long, default_value = "greedy")]
    selector: String,

    /// Placement: annealing | random
    #[arg(long, default_value = "annealing")]
    placement: String,

    /**
     * Move script for --selector manual, one letter per poll (u/d/l/r, '.' = no input).
     * A '.' or an off-board letter leaves that character in place for the poll;
     * the episode ends once the script runs out.
     * Example: --moves dd.rruu
     */
    #[arg(long)]
    moves: Option<String>,

    // ---------------- board ----------------
    #[arg(long, default_value_t = tilegrid_engine::engine::DEFAULT_COLUMNS)]
    columns: usize,

    #[arg(long, default_value_t = tilegrid_engine::engine::DEFAULT_ROWS)]
    rows: usize,

    /// Turn counter value that ends a board (one turn per committed move).
    #[arg(long, default_value_t = tilegrid_engine::engine::DEFAULT_END_TURN)]
    end_turn: u32,

    /// Number of agents placed on each board.
    #[arg(long, default_value_t = tilegrid_engine::engine::DEFAULT_CHARACTER_NUM)]
    characters: usize,

    // ---------------- annealing ----------------
    /// Candidates evaluated per placement.
    #[arg(long, default_value_t = 1000)]
    repeat: usize,

    /// Cooling horizon used in the temperature interpolation.
    #[arg(long, default_value_t = 10000)]
    cooling_horizon: usize,

    #[arg(long, default_value_t = 500.0)]
    start_temp: f64,

    #[arg(long, default_value_t = 10.0)]
    end_temp: f64,

    // ---------------- beam ----------------
    /// Plies expanded by --selector beam.
    #[arg(long, default_value_t = 4)]
    beam_depth: usize,

    /// Rollouts kept per ply by --selector beam.
    #[arg(long, default_value_t = 8)]
    beam_width: usize,

    // ---------------- visualization ----------------
    /**
     * Render board as ASCII every step; value is sleep in ms (e.g. 200). Omit to disable rendering.
     * Examples:
     *   --render 0     (render as fast as possible)
     *   --render 200   (sleep 200ms between frames)
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N episodes (only used with --verbosity 2).
    #[arg(long, default_value_t = 5)]
    report_every: u64,
}

fn init_tracing() {
    // Logs go to stderr so the progress bar and summary own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    // Board seeds are derived from this base seed.
    let base_seed = args.seed.unwrap_or(12345);

    let grid = GridConfig {
        columns: args.columns,
        rows: args.rows,
        end_turn: args.end_turn,
        character_num: args.characters,
    };
    grid.validate().context("invalid board configuration")?;

    let Some(kind) = SelectorKind::from_cli(&args.selector) else {
        bail!("unknown selector {:?} (expected greedy | random | beam | manual)", args.selector);
    };

    let input = args
        .moves
        .as_deref()
        .map(|m| Box::new(ScriptedInput::from_script(m)) as Box<dyn InputProvider>);

    // Selector instance (boxed so the CLI can switch implementations at runtime).
    let mut selector = build_selector(
        kind,
        SelectorOptions {
            seed: base_seed.wrapping_add(999),
            beam: BeamConfig::new(args.beam_depth, args.beam_width),
            input,
        },
    )
    .context("--selector manual requires --moves")?;

    let placer = match args.placement.to_ascii_lowercase().as_str() {
        "random" => Placer::Random(RandomPlacement::new(base_seed.wrapping_add(7))),
        "annealing" | "anneal" => {
            let anneal = AnnealingConfig {
                repeat: args.repeat,
                simulate_number: args.cooling_horizon,
                start_temp: args.start_temp,
                end_temp: args.end_temp,
            };
            Placer::Annealing(
                AnnealingPlacement::new(anneal, base_seed.wrapping_add(7))
                    .context("invalid annealing configuration")?,
            )
        }
        other => bail!("unknown placement {other:?} (expected annealing | random)"),
    };

    // Rollout configuration (data only; no logic).
    let cfg = RunnerConfig {
        episodes: args.episodes,
        base_seed,
        grid,

        selector_name: args.selector.clone(),

        verbosity: args.verbosity,
        report_every: args.report_every,

        render_ms: args.render,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, placer, sink);
    let report = runner.run(&mut *selector)?;

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: selector={} placement={} episodes={} stalled={} elapsed={:.3}s eps/s={:.2} moves={} avg_ticks={:.2} avg_score={:.2} max_score={} min_score={} collect={:.3} predicted={:.2} improvements={} forced={} total_score={}",
        report.selector,
        report.placement,
        report.episodes_finished,
        report.episodes_stalled,
        report.elapsed_s,
        report.episodes_per_s,
        report.moves_done,
        report.avg_ticks,
        report.avg_score,
        report.max_score,
        report.min_score,
        report.avg_collect_ratio,
        report.avg_placement_score,
        report.total_improvements,
        report.total_forced_moves,
        report.total_score,
    );
    Ok(())
}

// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod placement;
pub mod policy;
pub mod rollout;

// Flat re-exports for the CLI and tests:
pub use engine::{
    Animator, Character, ConfigError, Coord, DirectionType, Game, GridConfig, InstantAnimator,
    MapState, MoveEngine, MoveError, PendingMove, StepResult,
};
pub use placement::{
    AnnealingConfig, AnnealingPlacement, AnnealingReport, AnnealingSearch, AnnealingStep,
    AnnealingTransition, Placement, RandomPlacement, acceptance_probability, characters_at,
    distinct_random_coords, redraw_one,
};
pub use policy::{
    BeamConfig, BeamSearchSelector, GreedySelector, InputProvider, KeyState, ManualSelector,
    MoveSelector, RandomSelector, ScriptedInput, SelectorBuildError, SelectorKind,
    SelectorOptions, build_selector,
};
pub use rollout::{DirectionRollout, PositionRollout};

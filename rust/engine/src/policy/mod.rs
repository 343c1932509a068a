// rust/engine/src/policy/mod.rs
#![forbid(unsafe_code)]

mod base;
mod beam;
mod greedy;
mod kind;
mod manual;
mod random;

/**
 * Curated selector public API.
 *
 * Internal implementation modules remain private; only stable selector entrypoints are re-exported.
 */
pub use base::MoveSelector;
pub use beam::{BeamConfig, BeamSearchSelector};
pub use greedy::GreedySelector;
pub use kind::{SelectorBuildError, SelectorKind, SelectorOptions, build_selector};
pub use manual::{InputProvider, KeyState, ManualSelector, ScriptedInput};
pub use random::RandomSelector;

// rust/engine/src/rollout/mod.rs
#![forbid(unsafe_code)]

mod direction;
mod position;

/**
 * Disposable simulation branches.
 *
 * Both rollouts clone everything they are built from on construction; nothing
 * they do is visible to the live board or to sibling rollouts.
 */
pub use direction::DirectionRollout;
pub use position::PositionRollout;

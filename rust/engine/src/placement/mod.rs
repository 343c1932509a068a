// rust/engine/src/placement/mod.rs
#![forbid(unsafe_code)]

mod annealing;
mod base;
mod random;

pub use annealing::{
    AnnealingConfig, AnnealingPlacement, AnnealingReport, AnnealingSearch, AnnealingStep,
    AnnealingTransition, acceptance_probability,
};
pub use base::{Placement, characters_at};
pub use random::{RandomPlacement, distinct_random_coords, redraw_one};

// rust/engine/src/policy/kind.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use super::base::MoveSelector;
use super::beam::{BeamConfig, BeamSearchSelector};
use super::greedy::GreedySelector;
use super::manual::{InputProvider, ManualSelector};
use super::random::RandomSelector;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectorKind {
    Manual,
    Random,
    Greedy,
    BeamSearch,
}

impl SelectorKind {
    pub fn from_cli(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(SelectorKind::Manual),
            "random" => Some(SelectorKind::Random),
            "greedy" => Some(SelectorKind::Greedy),
            "beam" | "beam_search" | "beamsearch" => Some(SelectorKind::BeamSearch),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SelectorBuildError {
    #[error("manual selector needs an input provider")]
    MissingInput,
}

/// Collaborators and knobs a selector may need. Unused fields are ignored.
#[derive(Default)]
pub struct SelectorOptions {
    pub seed: u64,
    pub beam: BeamConfig,
    pub input: Option<Box<dyn InputProvider>>,
}

/// Builds the selector for `kind`. Fails only when a required collaborator
/// is missing; that is a wiring mistake, not something to retry.
pub fn build_selector(
    kind: SelectorKind,
    options: SelectorOptions,
) -> Result<Box<dyn MoveSelector>, SelectorBuildError> {
    let selector: Box<dyn MoveSelector> = match kind {
        SelectorKind::Manual => {
            let input = options.input.ok_or(SelectorBuildError::MissingInput)?;
            Box::new(ManualSelector::new(input))
        }
        SelectorKind::Random => Box::new(RandomSelector::new(options.seed)),
        SelectorKind::Greedy => Box::new(GreedySelector::new()),
        SelectorKind::BeamSearch => Box::new(BeamSearchSelector::new(options.beam)),
    };
    Ok(selector)
}

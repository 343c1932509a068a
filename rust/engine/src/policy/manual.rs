// rust/engine/src/policy/manual.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use crate::engine::{Character, DirectionType, MapState};

use super::base::MoveSelector;

/// Source of player input. Polled synchronously; must never block.
pub trait InputProvider {
    /// The pending direction, or `DirectionType::None` when nothing is pressed.
    fn poll(&mut self) -> DirectionType;

    /// Live devices never run out.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Snapshot of the four cursor keys.
///
/// With several keys held, RIGHT wins over LEFT over DOWN over UP.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn direction(&self) -> DirectionType {
        if self.right {
            DirectionType::Right
        } else if self.left {
            DirectionType::Left
        } else if self.down {
            DirectionType::Down
        } else if self.up {
            DirectionType::Up
        } else {
            DirectionType::None
        }
    }
}

impl InputProvider for KeyState {
    fn poll(&mut self) -> DirectionType {
        self.direction()
    }
}

/// Pre-recorded inputs, one per poll. Yields NONE once exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<DirectionType>,
}

impl ScriptedInput {
    pub fn new(moves: impl IntoIterator<Item = DirectionType>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    pub fn from_script(script: &str) -> Self {
        Self::new(DirectionType::parse_script(script))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self) -> DirectionType {
        self.queue.pop_front().unwrap_or(DirectionType::None)
    }

    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Forwards whatever the input provider reports. Legality is left to the
/// move engine, so an illegal key press just produces no movement.
pub struct ManualSelector {
    input: Box<dyn InputProvider>,
}

impl ManualSelector {
    pub fn new(input: Box<dyn InputProvider>) -> Self {
        Self { input }
    }
}

impl MoveSelector for ManualSelector {
    fn choose_direction(&mut self, _character: &Character, _map: &MapState) -> DirectionType {
        self.input.poll()
    }

    fn is_exhausted(&self) -> bool {
        self.input.is_exhausted()
    }
}

//! Scripted roll source for deterministic games and tests.

use std::collections::VecDeque;

use super::RollSource;

/// Plays back a fixed list of pin counts.
///
/// A repeating script yields the same count forever, which is how a
/// perfect game or an all-spares game is bowled in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    script: VecDeque<u8>,
    repeat: Option<u8>,
    consumed: usize,
}

impl ScriptedRolls {
    /// Play back `rolls` in order, then run dry.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            repeat: None,
            consumed: 0,
        }
    }

    /// Yield `pins` on every call.
    #[must_use]
    pub fn repeat(pins: u8) -> Self {
        Self {
            script: VecDeque::new(),
            repeat: Some(pins),
            consumed: 0,
        }
    }

    /// Scripted counts not yet handed out. Zero for a repeating script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Counts handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> Option<u8> {
        let pins = self.script.pop_front().or(self.repeat)?;
        self.consumed += 1;
        Some(pins)
    }
}

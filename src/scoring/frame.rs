//! A single frame: its own rolls, its borrowed fill rolls, and the rack rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::PIN_COUNT;
use crate::error::{RollViolation, ScoringError};

/// Fill rolls a fresh frame is owed before any ball is thrown.
const INITIAL_FILLS: u8 = 2;

/// Which rack rules a frame follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Up to two balls; a strike ends the frame.
    Regular,
    /// Up to three balls; a strike or spare earns a reset rack.
    Last,
    /// Bookkeeping frame past the end of the game that only sources fill
    /// rolls. Follows regular rack rules and is never scored.
    Bonus,
}

/// One frame of one player's game.
///
/// `fills_needed` starts at 2 and drops by one for every roll that lands on
/// or is borrowed by this frame, except the roll that clears the rack with
/// a mark. So a strike still owes two fills, a spare one, an open frame none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    index: usize,
    kind: FrameKind,
    rolls: SmallVec<[u8; 3]>,
    fill_rolls: SmallVec<[u8; 2]>,
    fills_needed: u8,
}

impl Frame {
    /// Create an empty frame at a 0-based position.
    #[must_use]
    pub fn new(index: usize, kind: FrameKind) -> Self {
        Self {
            index,
            kind,
            rolls: SmallVec::new(),
            fill_rolls: SmallVec::new(),
            fills_needed: INITIAL_FILLS,
        }
    }

    /// Position of this frame in the game.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rack rules this frame follows.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Pins knocked down by this frame's own balls.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Pins borrowed from later balls to pay a strike or spare bonus.
    #[must_use]
    pub fn fill_rolls(&self) -> &[u8] {
        &self.fill_rolls
    }

    /// Fill rolls still owed to this frame.
    #[must_use]
    pub fn fills_needed(&self) -> u8 {
        self.fills_needed
    }

    /// Pins standing for the next ball, or `None` once the frame is complete.
    #[must_use]
    pub fn standing(&self) -> Option<u8> {
        match (self.kind, self.rolls.as_slice()) {
            (_, []) => Some(PIN_COUNT),
            (FrameKind::Regular | FrameKind::Bonus, [first]) if *first < PIN_COUNT => {
                Some(PIN_COUNT - first)
            }
            (FrameKind::Regular | FrameKind::Bonus, _) => None,
            (FrameKind::Last, [first]) => Some(if *first == PIN_COUNT {
                PIN_COUNT
            } else {
                PIN_COUNT - first
            }),
            (FrameKind::Last, [first, second]) => {
                if *first == PIN_COUNT {
                    Some(if *second == PIN_COUNT {
                        PIN_COUNT
                    } else {
                        PIN_COUNT - second
                    })
                } else if first + second == PIN_COUNT {
                    Some(PIN_COUNT)
                } else {
                    None
                }
            }
            (FrameKind::Last, _) => None,
        }
    }

    /// Check whether `pins` may be recorded as this frame's next ball.
    pub fn check_roll(&self, pins: u8) -> Result<(), ScoringError> {
        let violation = if pins > PIN_COUNT {
            RollViolation::OutOfRange
        } else {
            match self.standing() {
                None => RollViolation::FrameComplete,
                Some(standing) if pins > standing => RollViolation::ExceedsStanding { standing },
                Some(_) => return Ok(()),
            }
        };
        Err(ScoringError::InvalidRoll {
            frame: self.index,
            pins,
            violation,
        })
    }

    /// Record a ball thrown in this frame.
    pub fn record_roll(&mut self, pins: u8) -> Result<(), ScoringError> {
        self.check_roll(pins)?;

        let clears_with_mark = match self.rolls.as_slice() {
            [] => pins == PIN_COUNT,
            [first] => *first < PIN_COUNT && first + pins == PIN_COUNT,
            _ => false,
        };

        self.rolls.push(pins);
        if !clears_with_mark {
            self.fills_needed = self.fills_needed.saturating_sub(1);
        }

        trace!(
            frame = self.index,
            pins,
            fills_needed = self.fills_needed,
            "recorded roll"
        );
        Ok(())
    }

    /// Check if the frame has taken all of its own balls.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.standing().is_none()
    }

    /// Check if the frame still wants balls of its own.
    #[must_use]
    pub fn needs_bowls(&self) -> bool {
        !self.is_complete()
    }

    /// Check if the frame is still owed fill rolls.
    #[must_use]
    pub fn needs_fill(&self) -> bool {
        self.fills_needed > 0
    }

    /// Check whether `pins` may be credited as this frame's next fill.
    pub fn check_fill(&self, pins: u8) -> Result<(), ScoringError> {
        if !self.needs_fill() {
            return Err(ScoringError::FillOverflow { frame: self.index });
        }
        if pins > PIN_COUNT {
            return Err(ScoringError::InvalidRoll {
                frame: self.index,
                pins,
                violation: RollViolation::OutOfRange,
            });
        }
        Ok(())
    }

    /// Credit a later ball to this frame's bonus.
    pub fn contribute_fill(&mut self, pins: u8) -> Result<(), ScoringError> {
        self.check_fill(pins)?;

        self.fill_rolls.push(pins);
        self.fills_needed -= 1;

        trace!(
            frame = self.index,
            pins,
            fills_needed = self.fills_needed,
            "contributed fill"
        );
        Ok(())
    }

    /// Frame score: own rolls plus fill rolls.
    ///
    /// `None` while fills are still owed.
    #[must_use]
    pub fn total_score(&self) -> Option<u32> {
        if self.needs_fill() {
            return None;
        }
        Some(self.pin_total())
    }

    /// Sum of every pin credited to the frame so far.
    #[must_use]
    pub fn pin_total(&self) -> u32 {
        self.rolls
            .iter()
            .chain(self.fill_rolls.iter())
            .map(|&p| u32::from(p))
            .sum()
    }

    /// First ball took all ten pins.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    /// First two balls took all ten pins, first ball did not.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Two balls left pins standing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first < PIN_COUNT && first + second < PIN_COUNT,
            _ => false,
        }
    }

    /// Scorecard notation for the frame's own balls, e.g. `X`, `7/`, `9-`, `XX3`.
    #[must_use]
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(self.rolls.len());
        let mut standing = PIN_COUNT;
        let mut first_ball = true;

        for &pins in &self.rolls {
            let symbol = if first_ball && pins == PIN_COUNT {
                'X'
            } else if !first_ball && pins == standing {
                '/'
            } else if pins == 0 {
                '-'
            } else {
                char::from(b'0' + pins)
            };
            out.push(symbol);

            if first_ball && pins < PIN_COUNT {
                standing -= pins;
                first_ball = false;
            } else {
                standing = PIN_COUNT;
                first_ball = true;
            }
        }
        out
    }
}

//! One player's scorecard: the frames, the fill queue, the running score.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LastFrameRule, DEFAULT_FRAME_COUNT};
use crate::error::ScoringError;

use super::frame::{Frame, FrameKind};

/// Frames, pending fills, and the cumulative score for one player.
///
/// ## Fill queue
///
/// A frame that has taken all its own balls but is still owed bonus pins
/// waits in a FIFO queue. Every later ball is offered to each waiting frame,
/// oldest first. A frame leaves the queue, and its total is added to the
/// score, on the ball that pays its last fill. At most two frames wait at
/// once: a strike two frames back and a mark one frame back.
///
/// ## Score
///
/// The score only grows, and only when a frame is fully resolved, so each
/// frame contributes exactly once and frames resolve in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    frames: Vec<Frame>,
    /// Indices into `frames`, oldest first.
    fill_queue: VecDeque<usize>,
    score: u32,
    max_frames: usize,
    last_frame: LastFrameRule,
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT, LastFrameRule::default())
    }
}

impl Scorecard {
    /// Create an empty scorecard for a game of `max_frames` frames.
    #[must_use]
    pub fn new(max_frames: usize, last_frame: LastFrameRule) -> Self {
        assert!(max_frames > 0, "Must have at least 1 frame");

        Self {
            frames: Vec::with_capacity(max_frames + 1),
            fill_queue: VecDeque::with_capacity(2),
            score: 0,
            max_frames,
            last_frame,
        }
    }

    /// Running total of every resolved frame.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Frames per game.
    #[must_use]
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    /// How the last frame collects its bonus balls.
    #[must_use]
    pub fn last_frame_rule(&self) -> LastFrameRule {
        self.last_frame
    }

    /// All frames opened so far, including any bonus frames not yet trimmed.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Look up a frame by index.
    pub fn frame(&self, frame_num: usize) -> Result<&Frame, ScoringError> {
        self.frames
            .get(frame_num)
            .ok_or(ScoringError::UnknownFrame { frame: frame_num })
    }

    fn frame_mut(&mut self, frame_num: usize) -> Result<&mut Frame, ScoringError> {
        self.frames
            .get_mut(frame_num)
            .ok_or(ScoringError::UnknownFrame { frame: frame_num })
    }

    /// Open the next frame and return its index.
    ///
    /// Past the last scoring frame, a bonus frame may only be opened while
    /// some frame is still owed fills.
    pub fn open_frame(&mut self) -> Result<usize, ScoringError> {
        let index = self.frames.len();
        let kind = if index + 1 < self.max_frames {
            FrameKind::Regular
        } else if index + 1 == self.max_frames {
            match self.last_frame {
                LastFrameRule::ThreeBall => FrameKind::Last,
                LastFrameRule::BonusFrames => FrameKind::Regular,
            }
        } else if self.needs_fills() {
            FrameKind::Bonus
        } else {
            return Err(ScoringError::FrameLimit {
                max_frames: self.max_frames,
            });
        };

        if kind == FrameKind::Bonus {
            debug!(frame = index, pending = self.fill_queue.len(), "opened bonus frame");
        }
        self.frames.push(Frame::new(index, kind));
        Ok(index)
    }

    /// Check whether `pins` may be recorded as the next ball of a frame.
    pub fn check_roll(&self, frame_num: usize, pins: u8) -> Result<(), ScoringError> {
        self.frame(frame_num)?.check_roll(pins)
    }

    /// Record a ball thrown in a frame.
    pub fn record_frame_roll(&mut self, frame_num: usize, pins: u8) -> Result<(), ScoringError> {
        self.frame_mut(frame_num)?.record_roll(pins)
    }

    /// Settle a frame once it has taken all its own balls.
    ///
    /// A frame still owed fills joins the fill queue; otherwise its total is
    /// added to the score now. Bonus frames are never scored.
    pub fn finalize_frame(&mut self, frame_num: usize) -> Result<(), ScoringError> {
        let frame = self.frame(frame_num)?;
        if !frame.is_complete() {
            return Err(ScoringError::IncompleteFrame { frame: frame_num });
        }
        if frame.kind() == FrameKind::Bonus {
            return Ok(());
        }

        let notation = frame.notation();
        let fills_needed = frame.fills_needed();
        match frame.total_score() {
            Some(total) => {
                self.score += total;
                debug!(
                    frame = frame_num,
                    rolls = %notation,
                    total,
                    score = self.score,
                    "scored frame"
                );
            }
            None => {
                debug!(frame = frame_num, rolls = %notation, fills_needed, "frame awaiting fills");
                self.fill_queue.push_back(frame_num);
            }
        }
        Ok(())
    }

    /// Offer a ball to every frame waiting on fills, oldest first.
    ///
    /// Each waiting frame takes at most one fill from the ball. A frame whose
    /// last fill is paid is scored and leaves the queue. With nothing waiting
    /// this is a no-op. A ball any waiting frame rejects leaves the queue and
    /// the score untouched.
    pub fn resolve_fills(&mut self, pins: u8) -> Result<(), ScoringError> {
        for &frame_num in &self.fill_queue {
            self.frame(frame_num)?.check_fill(pins)?;
        }

        let pending = self.fill_queue.len();
        for _ in 0..pending {
            let Some(frame_num) = self.fill_queue.pop_front() else {
                break;
            };
            let frame = self.frame_mut(frame_num)?;
            frame.contribute_fill(pins)?;

            match frame.total_score() {
                Some(total) => {
                    self.score += total;
                    debug!(frame = frame_num, total, score = self.score, "resolved fills");
                }
                None => self.fill_queue.push_back(frame_num),
            }
        }
        Ok(())
    }

    /// Apply a ball that must pay a pending fill.
    ///
    /// Same as [`resolve_fills`](Self::resolve_fills), but an empty queue is
    /// an error: used while collecting bonus balls after the last frame.
    pub fn apply_bonus_roll(&mut self, pins: u8) -> Result<(), ScoringError> {
        if self.fill_queue.is_empty() {
            return Err(ScoringError::EmptyFillQueue { pins });
        }
        self.resolve_fills(pins)
    }

    /// Check if any frame is owed fills.
    #[must_use]
    pub fn needs_fills(&self) -> bool {
        !self.fill_queue.is_empty()
    }

    /// Frames currently waiting in the fill queue.
    #[must_use]
    pub fn pending_fills(&self) -> usize {
        self.fill_queue.len()
    }

    /// Drop bonus frames once they have served their fills.
    pub fn remove_extra_frames(&mut self) {
        if self.frames.len() > self.max_frames {
            debug!(
                removed = self.frames.len() - self.max_frames,
                "trimmed bonus frames"
            );
            self.frames.truncate(self.max_frames);
        }
    }

    /// Every scoring frame has been opened.
    #[must_use]
    pub fn is_last_frame(&self) -> bool {
        self.frames.len() == self.max_frames
    }

    /// Bonus frames are open past the end of the game.
    #[must_use]
    pub fn is_end_game(&self) -> bool {
        self.frames.len() > self.max_frames
    }

    /// All frames are bowled and every fill is paid.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames.len() == self.max_frames
            && !self.needs_fills()
            && self.frames.iter().all(Frame::is_complete)
    }

    /// Running total after each resolved frame, as printed on a scorecard.
    ///
    /// Stops at the first frame that is not yet resolved.
    #[must_use]
    pub fn frame_scores(&self) -> Vec<u32> {
        self.frames
            .iter()
            .take(self.max_frames)
            .map(Frame::total_score)
            .take_while(Option::is_some)
            .scan(0u32, |running, total| {
                *running += total.unwrap_or(0);
                Some(*running)
            })
            .collect()
    }
}

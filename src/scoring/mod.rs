//! Scoring engine.
//!
//! This module holds the frame/roll state machine and the per-player
//! scorecard that defers strike and spare bonuses:
//! - **Frame**: own rolls, borrowed fill rolls, rack rules, classification
//! - **Scorecard**: ordered frames, the FIFO fill queue, the running score
//!
//! ## Example Usage
//!
//! ```
//! use rust_bowling::scoring::Scorecard;
//!
//! let mut card = Scorecard::default();
//!
//! // Frame 0: spare
//! let frame = card.open_frame().unwrap();
//! for pins in [6, 4] {
//!     card.resolve_fills(pins).unwrap();
//!     card.record_frame_roll(frame, pins).unwrap();
//! }
//! card.finalize_frame(frame).unwrap();
//! assert_eq!(card.score(), 0);
//!
//! // Frame 1: the first ball pays the spare's fill
//! let frame = card.open_frame().unwrap();
//! card.resolve_fills(8).unwrap();
//! card.record_frame_roll(frame, 8).unwrap();
//! assert_eq!(card.score(), 18);
//! ```

mod frame;
mod scorecard;

pub use frame::{Frame, FrameKind};
pub use scorecard::Scorecard;

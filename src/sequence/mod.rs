//! Sequence: the line-ordering state machine.
//!
//! The sequencer owns the compiled lines and the [`SequenceState`], and
//! yields timed [`Step`]s that a driver (the [`Player`](crate::player))
//! executes. All ordering guarantees live here: lines render strictly in
//! script order, one at a time, with their effects drained to completion
//! before the next line opens.

mod sequencer;
mod state;

pub use sequencer::{Sequencer, Step};
pub use state::{Phase, SequenceState};

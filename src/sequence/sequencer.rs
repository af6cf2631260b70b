//! The sequencer: consumes compiled lines in order and yields timed
//! steps.
//!
//! The sequencer is deliberately driver-agnostic: it performs no waiting
//! and no output itself. Each call to [`Sequencer::next_step`] returns
//! what the driver must do next, which makes the whole state machine
//! testable without sleeping.

use super::state::{Phase, SequenceState};
use crate::effect::{ActiveEffect, Effect};
use crate::mount::OutputOp;
use crate::script::CompiledScript;
use std::time::Duration;

/// One instruction from the sequencer to its driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Not yet activated; poll the visibility gate and call again.
    AwaitVisible,
    /// Wait `delay`, then apply `op` (if any) to the mount.
    Frame {
        /// Delay to honor before the mutation. Zero means none.
        delay: Duration,
        /// The mutation, or `None` for a pure delay (start and
        /// inter-line waits).
        op: Option<OutputOp>,
    },
    /// The sequence has finished. Terminal; repeats forever.
    Done,
}

/// What the running sequencer does next.
#[derive(Debug)]
enum Slot {
    /// Clear the mount on activation.
    Activate,
    /// Fixed delay between activation and the first line.
    StartDelay,
    /// Build the effect for the line at the cursor, or finish.
    OpenLine,
    /// Drive the active effect to completion.
    Effect(ActiveEffect),
    /// Trailing delay after the current line's effect.
    LineDelay,
    /// Move the cursor to the next line.
    Advance,
    /// Nothing scheduled (not running, or finished).
    Parked,
}

/// The line-sequencing state machine for one widget instance.
///
/// Owns the compiled lines and the [`SequenceState`] exclusively.
/// Activation is one-shot: the first [`notify_visible`] moves the
/// machine to [`Phase::Running`] and every later call is ignored.
///
/// [`notify_visible`]: Self::notify_visible
#[derive(Debug)]
pub struct Sequencer {
    script: CompiledScript,
    state: SequenceState,
    slot: Slot,
}

impl Sequencer {
    /// Create a sequencer for the given script. The machine arms itself
    /// immediately: it returns already waiting on visibility.
    pub fn new(script: CompiledScript) -> Self {
        let mut sequencer = Self {
            script,
            state: SequenceState::default(),
            slot: Slot::Parked,
        };
        sequencer.state.phase = Phase::WaitingVisible;
        sequencer
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the line currently being rendered.
    pub const fn cursor(&self) -> usize {
        self.state.cursor
    }

    /// Signal that the widget became visible.
    ///
    /// The first call while waiting activates the machine; any further
    /// call, in any phase, is ignored.
    pub fn notify_visible(&mut self) {
        if self.state.phase == Phase::WaitingVisible {
            self.state.phase = Phase::Running;
            self.slot = Slot::Activate;
        }
    }

    /// Produce the next instruction for the driver.
    pub fn next_step(&mut self) -> Step {
        match self.state.phase {
            Phase::Idle | Phase::WaitingVisible => return Step::AwaitVisible,
            Phase::Done => return Step::Done,
            Phase::Running => {}
        }

        loop {
            match &mut self.slot {
                Slot::Activate => {
                    self.slot = Slot::StartDelay;
                    return Step::Frame {
                        delay: Duration::ZERO,
                        op: Some(OutputOp::Clear),
                    };
                }
                Slot::StartDelay => {
                    self.slot = Slot::OpenLine;
                    return Step::Frame {
                        delay: self.script.start_delay,
                        op: None,
                    };
                }
                Slot::OpenLine => match self.script.lines.get(self.state.cursor) {
                    Some(line) => self.slot = Slot::Effect(ActiveEffect::for_line(line)),
                    None => {
                        self.state.phase = Phase::Done;
                        self.slot = Slot::Parked;
                        return Step::Done;
                    }
                },
                Slot::Effect(effect) => match effect.next_frame() {
                    Some(frame) => {
                        return Step::Frame {
                            delay: frame.delay,
                            op: Some(frame.op),
                        }
                    }
                    None => self.slot = Slot::LineDelay,
                },
                Slot::LineDelay => {
                    let delay = self.script.lines[self.state.cursor].line_delay;
                    self.slot = Slot::Advance;
                    return Step::Frame { delay, op: None };
                }
                Slot::Advance => {
                    // Reached only after the driver consumed the trailing
                    // delay, so the cursor advances strictly after it.
                    self.state.cursor += 1;
                    self.slot = Slot::OpenLine;
                }
                Slot::Parked => {
                    self.state.phase = Phase::Done;
                    return Step::Done;
                }
            }
        }
    }
}

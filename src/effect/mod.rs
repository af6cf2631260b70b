//! Effects: per-mode line rendering animations.
//!
//! An effect is a frame iterator. Each [`EffectFrame`] means "wait
//! `delay`, then apply `op`"; a zero delay means the mutation is
//! immediate. The sequencer drains one effect to completion before the
//! next line starts, so frames from two lines never interleave.

mod plain;
mod progress;
mod typing;

pub use plain::PlainEffect;
pub use progress::{ProgressEffect, PROGRESS_TICK_DELAY};
pub use typing::TypingEffect;

use crate::mount::OutputOp;
use crate::script::{LineMode, RenderableLine};
use std::time::Duration;

/// One animation frame: a delay to honor, then a mutation to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectFrame {
    /// Delay to wait before applying the mutation.
    pub delay: Duration,
    /// The mutation.
    pub op: OutputOp,
}

impl EffectFrame {
    /// A frame with no delay.
    pub const fn immediate(op: OutputOp) -> Self {
        Self {
            delay: Duration::ZERO,
            op,
        }
    }
}

/// A line-rendering animation, driven frame by frame.
pub trait Effect {
    /// Produce the next frame, or `None` once the effect has completed.
    fn next_frame(&mut self) -> Option<EffectFrame>;
}

/// The effect bound to one line, dispatched by the line's mode.
#[derive(Debug)]
pub enum ActiveEffect {
    /// Immediate full-line append.
    Plain(PlainEffect),
    /// Character-by-character typing.
    Typing(TypingEffect),
    /// Growing progress bar.
    Progress(ProgressEffect),
}

impl ActiveEffect {
    /// Build the effect matching the line's mode.
    pub fn for_line(line: &RenderableLine) -> Self {
        match &line.mode {
            LineMode::Plain => Self::Plain(PlainEffect::new(&line.text, line.color)),
            LineMode::Input { type_delay, cursor } => Self::Typing(TypingEffect::new(
                &line.text,
                line.color,
                *type_delay,
                *cursor,
            )),
            LineMode::Progress {
                length,
                fill,
                stop_percent,
            } => Self::Progress(ProgressEffect::new(*length, *fill, *stop_percent, line.color)),
        }
    }
}

impl Effect for ActiveEffect {
    fn next_frame(&mut self) -> Option<EffectFrame> {
        match self {
            Self::Plain(effect) => effect.next_frame(),
            Self::Typing(effect) => effect.next_frame(),
            Self::Progress(effect) => effect.next_frame(),
        }
    }
}

#[cfg(test)]
pub(crate) fn drain(effect: &mut impl Effect) -> Vec<EffectFrame> {
    let mut frames = Vec::new();
    while let Some(frame) = effect.next_frame() {
        frames.push(frame);
    }
    frames
}

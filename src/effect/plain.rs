//! Plain effect: append the full line immediately.

use super::{Effect, EffectFrame};
use crate::color::Rgb;
use crate::mount::OutputOp;

/// Appends the line's full text in a single mutation, no intermediate
/// frames.
#[derive(Debug)]
pub struct PlainEffect {
    op: Option<OutputOp>,
}

impl PlainEffect {
    /// Create the effect for the given text and color.
    pub fn new(text: &str, color: Option<Rgb>) -> Self {
        Self {
            op: Some(OutputOp::Append {
                text: text.to_owned(),
                color,
            }),
        }
    }
}

impl Effect for PlainEffect {
    fn next_frame(&mut self) -> Option<EffectFrame> {
        self.op.take().map(EffectFrame::immediate)
    }
}

//! Progress effect: a growing bar with a rounded percentage readout.

use super::{Effect, EffectFrame};
use crate::color::Rgb;
use crate::mount::OutputOp;
use std::time::Duration;

/// Fixed delay between progress ticks, independent of the script's
/// typing delay.
pub const PROGRESS_TICK_DELAY: Duration = Duration::from_millis(30);

/// Grows a bar one fill glyph per tick. On tick `i` the line shows `i`
/// fill glyphs followed by the rounded percentage `i / length * 100`.
/// The tick whose percentage first exceeds `stop_percent` is still
/// rendered, then ticking stops; a `stop_percent` of zero renders no
/// ticks at all. Each bar is self-contained, there is no resume.
#[derive(Debug)]
pub struct ProgressEffect {
    length: usize,
    fill: char,
    stop_percent: u32,
    color: Option<Rgb>,
    tick: usize,
    opened: bool,
    stopped: bool,
}

impl ProgressEffect {
    /// Create the effect for a bar of `length` fill glyphs.
    pub const fn new(length: usize, fill: char, stop_percent: u32, color: Option<Rgb>) -> Self {
        Self {
            length,
            fill,
            stop_percent,
            color,
            tick: 0,
            opened: false,
            stopped: false,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn percent(&self, tick: usize) -> u32 {
        ((tick as f64 / self.length as f64) * 100.0).round() as u32
    }
}

impl Effect for ProgressEffect {
    fn next_frame(&mut self) -> Option<EffectFrame> {
        if !self.opened {
            self.opened = true;
            return Some(EffectFrame::immediate(OutputOp::Append {
                text: String::new(),
                color: self.color,
            }));
        }
        // A zero-length bar or a zero stop threshold renders no ticks.
        if self.stopped || self.length == 0 || self.stop_percent == 0 || self.tick >= self.length {
            return None;
        }

        self.tick += 1;
        let percent = self.percent(self.tick);
        if percent > self.stop_percent {
            self.stopped = true;
        }

        let bar: String = std::iter::repeat(self.fill).take(self.tick).collect();
        Some(EffectFrame {
            delay: PROGRESS_TICK_DELAY,
            op: OutputOp::ReplaceLast {
                text: format!("{bar} {percent}%"),
            },
        })
    }
}

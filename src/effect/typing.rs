//! Typing effect: character-by-character rendering with a cursor glyph.

use super::{Effect, EffectFrame};
use crate::color::Rgb;
use crate::mount::OutputOp;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Append the line with an empty buffer so no partial text shows
    /// before the first tick.
    Open,
    /// Show the cursor glyph.
    ShowCursor,
    /// Emit grapheme `next` (0-based) after the per-character delay.
    Type { next: usize },
    /// Remove the cursor glyph.
    HideCursor,
    Done,
}

/// Types a line one grapheme at a time, waiting the per-character delay
/// before every grapheme (the first included). The cursor glyph is shown
/// while typing and removed once the line is complete.
#[derive(Debug)]
pub struct TypingEffect {
    text: String,
    /// Byte offsets of each grapheme's end, so prefixes slice cleanly.
    boundaries: Vec<usize>,
    color: Option<Rgb>,
    type_delay: Duration,
    cursor: char,
    stage: Stage,
}

impl TypingEffect {
    /// Create the effect for the given text.
    pub fn new(text: &str, color: Option<Rgb>, type_delay: Duration, cursor: char) -> Self {
        let boundaries = text
            .grapheme_indices(true)
            .map(|(offset, grapheme)| offset + grapheme.len())
            .collect();
        Self {
            text: text.to_owned(),
            boundaries,
            color,
            type_delay,
            cursor,
            stage: Stage::Open,
        }
    }

    fn prefix(&self, graphemes: usize) -> String {
        let end = self.boundaries.get(graphemes - 1).copied().unwrap_or(0);
        self.text[..end].to_owned()
    }
}

impl Effect for TypingEffect {
    fn next_frame(&mut self) -> Option<EffectFrame> {
        match self.stage {
            Stage::Open => {
                self.stage = Stage::ShowCursor;
                Some(EffectFrame::immediate(OutputOp::Append {
                    text: String::new(),
                    color: self.color,
                }))
            }
            Stage::ShowCursor => {
                self.stage = if self.boundaries.is_empty() {
                    Stage::HideCursor
                } else {
                    Stage::Type { next: 0 }
                };
                Some(EffectFrame::immediate(OutputOp::CursorOn {
                    glyph: self.cursor,
                }))
            }
            Stage::Type { next } => {
                let emitted = next + 1;
                self.stage = if emitted == self.boundaries.len() {
                    Stage::HideCursor
                } else {
                    Stage::Type { next: emitted }
                };
                Some(EffectFrame {
                    delay: self.type_delay,
                    op: OutputOp::ReplaceLast {
                        text: self.prefix(emitted),
                    },
                })
            }
            Stage::HideCursor => {
                self.stage = Stage::Done;
                Some(EffectFrame::immediate(OutputOp::CursorOff))
            }
            Stage::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::drain;
    use super::*;

    fn texts(frames: &[EffectFrame]) -> Vec<String> {
        frames
            .iter()
            .filter_map(|frame| match &frame.op {
                OutputOp::ReplaceLast { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_types_abc_in_three_ticks() {
        let delay = Duration::from_millis(10);
        let mut effect = TypingEffect::new("abc", None, delay, '▋');
        let frames = drain(&mut effect);

        // Open, cursor on, three ticks, cursor off.
        assert_eq!(frames.len(), 6);
        assert_eq!(
            frames[0].op,
            OutputOp::Append {
                text: String::new(),
                color: None,
            }
        );
        assert_eq!(frames[1].op, OutputOp::CursorOn { glyph: '▋' });
        assert_eq!(texts(&frames), vec!["a", "ab", "abc"]);
        assert_eq!(frames[5].op, OutputOp::CursorOff);

        // Every tick waits the per-character delay, the first included.
        for frame in &frames[2..5] {
            assert_eq!(frame.delay, delay);
        }
    }

    #[test]
    fn test_cursor_present_during_and_absent_after() {
        let mut effect = TypingEffect::new("hi", None, Duration::ZERO, '▋');
        let frames = drain(&mut effect);

        let cursor_on = frames
            .iter()
            .position(|f| matches!(f.op, OutputOp::CursorOn { .. }))
            .unwrap();
        let cursor_off = frames
            .iter()
            .position(|f| f.op == OutputOp::CursorOff)
            .unwrap();
        let last_tick = frames
            .iter()
            .rposition(|f| matches!(f.op, OutputOp::ReplaceLast { .. }))
            .unwrap();

        assert!(cursor_on < last_tick);
        assert!(cursor_off > last_tick);
        assert_eq!(cursor_off, frames.len() - 1);
    }

    #[test]
    fn test_graphemes_are_not_split() {
        let mut effect = TypingEffect::new("aé👍", None, Duration::ZERO, '▋');
        let frames = drain(&mut effect);
        assert_eq!(texts(&frames), vec!["a", "aé", "aé👍"]);
    }

    #[test]
    fn test_empty_text_skips_ticks() {
        let mut effect = TypingEffect::new("", None, Duration::from_millis(5), '▋');
        let frames = drain(&mut effect);

        // Still opens the line and toggles the cursor, but never ticks.
        assert_eq!(frames.len(), 3);
        assert!(texts(&frames).is_empty());
        assert_eq!(frames[2].op, OutputOp::CursorOff);
    }

    #[test]
    fn test_custom_cursor_glyph() {
        let mut effect = TypingEffect::new("x", None, Duration::ZERO, '_');
        let frames = drain(&mut effect);
        assert_eq!(frames[1].op, OutputOp::CursorOn { glyph: '_' });
    }
}

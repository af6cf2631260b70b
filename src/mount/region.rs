//! In-memory mount region.
//!
//! Stores the mounted output as a list of colored lines plus the cursor
//! state. The host's width/height sizing is carried opaquely: the region
//! reports it back through [`MountRegion::size`] but never interprets it.

use super::{Mount, OutputOp};
use crate::color::Rgb;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// One rendered line of the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLine {
    /// The line's current text.
    pub text: String,
    /// The line's display color, if any.
    pub color: Option<Rgb>,
}

/// An in-memory output region.
#[derive(Debug, Clone, Default)]
pub struct MountRegion {
    lines: Vec<RegionLine>,
    cursor: Option<char>,
    min_width: u16,
    min_height: u16,
}

impl MountRegion {
    /// Create a region with the host-supplied minimum sizing.
    pub const fn new(min_width: u16, min_height: u16) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            min_width,
            min_height,
        }
    }

    /// The rendered lines, in output order.
    pub fn lines(&self) -> &[RegionLine] {
        &self.lines
    }

    /// The cursor glyph currently shown, if any.
    pub const fn cursor_glyph(&self) -> Option<char> {
        self.cursor
    }

    /// Whether the region holds no output.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current display size in columns and rows: the content's extent,
    /// never smaller than the host-supplied minimum.
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .lines
            .iter()
            .map(|line| line.text.width())
            .max()
            .unwrap_or(0);
        let width = u16::try_from(widest).unwrap_or(u16::MAX);
        let height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        (width.max(self.min_width), height.max(self.min_height))
    }
}

impl Mount for MountRegion {
    fn apply(&mut self, op: OutputOp) {
        match op {
            OutputOp::Clear => {
                self.lines.clear();
                self.cursor = None;
            }
            OutputOp::Append { text, color } => {
                self.lines.push(RegionLine { text, color });
            }
            OutputOp::ReplaceLast { text } => {
                if let Some(last) = self.lines.last_mut() {
                    last.text = text;
                }
            }
            OutputOp::CursorOn { glyph } => self.cursor = Some(glyph),
            OutputOp::CursorOff => self.cursor = None,
        }
    }
}

impl fmt::Display for MountRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            f.write_str(&line.text)?;
            if index + 1 == self.lines.len() {
                if let Some(glyph) = self.cursor {
                    write!(f, "{glyph}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

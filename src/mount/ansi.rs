//! ANSI terminal mount.
//!
//! Renders the output region inline on a live terminal using crossterm.
//! The active line is kept open (no trailing newline) so typing and
//! progress ticks can redraw it in place with a carriage return.

use super::{Mount, OutputOp};
use crate::color::Rgb;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// A mount that renders to any ANSI-capable writer.
pub struct AnsiMount<W: Write> {
    out: W,
    /// Text of the line currently open for in-place redraws.
    active_text: String,
    /// Color of the active line.
    active_color: Option<Rgb>,
    /// Cursor glyph shown at the end of the active line, if any.
    cursor: Option<char>,
    /// Lines emitted since the last clear (for rewinding on `Clear`).
    lines_emitted: u16,
}

impl<W: Write> AnsiMount<W> {
    /// Create a mount writing to the given output.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            active_text: String::new(),
            active_color: None,
            cursor: None,
            lines_emitted: 0,
        }
    }

    /// Consume the mount, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_apply(&mut self, op: OutputOp) -> io::Result<()> {
        match op {
            OutputOp::Clear => {
                // Rewind over everything emitted so far and wipe it.
                if self.lines_emitted > 1 {
                    queue!(self.out, MoveUp(self.lines_emitted - 1))?;
                }
                queue!(self.out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
                self.active_text.clear();
                self.active_color = None;
                self.cursor = None;
                self.lines_emitted = 0;
            }
            OutputOp::Append { text, color } => {
                if self.lines_emitted > 0 {
                    queue!(self.out, Print("\r\n"))?;
                }
                self.active_text = text;
                self.active_color = color;
                self.cursor = None;
                self.lines_emitted = self.lines_emitted.saturating_add(1);
                self.redraw_active()?;
            }
            OutputOp::ReplaceLast { text } => {
                self.active_text = text;
                self.redraw_active()?;
            }
            OutputOp::CursorOn { glyph } => {
                self.cursor = Some(glyph);
                self.redraw_active()?;
            }
            OutputOp::CursorOff => {
                self.cursor = None;
                self.redraw_active()?;
            }
        }
        self.out.flush()
    }

    fn redraw_active(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::UntilNewLine))?;
        if let Some(rgb) = self.active_color {
            queue!(
                self.out,
                SetForegroundColor(Color::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b
                })
            )?;
        }
        queue!(self.out, Print(&self.active_text))?;
        if self.active_color.is_some() {
            queue!(self.out, ResetColor)?;
        }
        if let Some(glyph) = self.cursor {
            queue!(self.out, Print(glyph))?;
        }
        Ok(())
    }
}

impl<W: Write> Mount for AnsiMount<W> {
    fn apply(&mut self, op: OutputOp) {
        // The widget is decorative; a failing writer must not take the
        // sequence down with it.
        let _ = self.try_apply(op);
    }
}

//! Line descriptors: the external script input format.

/// One scripted line, as supplied by the host.
///
/// Every field is optional; [`compile`](super::compile) resolves absent
/// fields to component defaults. Fields that do not apply to the line's
/// kind (e.g. `progress_length` on a typed line) are silently ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDescriptor {
    /// Displayable text. Absent means an empty line.
    pub value: Option<String>,
    /// Rendering kind: `"input"` (typed) or `"progress"` (bar).
    /// Anything else, including absence, renders as a plain line.
    pub kind: Option<String>,
    /// Display color (`"#rrggbb"`, `"#rgb"`, or a named color).
    /// Unrecognised values degrade to uncolored.
    pub color: Option<String>,
    /// Delay before the first line starts, in milliseconds.
    /// Honored only on the first descriptor; ignored elsewhere.
    pub start_delay_ms: Option<u64>,
    /// Per-character delay for typed lines, in milliseconds.
    pub type_delay_ms: Option<u64>,
    /// Delay after this line finishes, before the next starts.
    pub line_delay_ms: Option<u64>,
    /// Progress bar width in fill characters.
    pub progress_length: Option<usize>,
    /// Progress bar fill glyph.
    pub progress_char: Option<char>,
    /// Percentage at which the bar stops ticking.
    pub progress_percent: Option<u32>,
    /// Cursor glyph shown while a typed line is animating.
    pub cursor: Option<char>,
}

impl LineDescriptor {
    /// A plain line with the given text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A typed ("input") line with the given text.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            kind: Some(String::from("input")),
            ..Self::default()
        }
    }

    /// A progress bar line with default sizing.
    pub fn progress() -> Self {
        Self {
            kind: Some(String::from("progress")),
            ..Self::default()
        }
    }

    /// An empty plain line (blank row in the output).
    pub fn blank() -> Self {
        Self::default()
    }

    /// Set the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the per-character typing delay in milliseconds.
    #[must_use]
    pub const fn with_type_delay(mut self, ms: u64) -> Self {
        self.type_delay_ms = Some(ms);
        self
    }

    /// Set the trailing delay in milliseconds.
    #[must_use]
    pub const fn with_line_delay(mut self, ms: u64) -> Self {
        self.line_delay_ms = Some(ms);
        self
    }

    /// Set the start delay in milliseconds (first descriptor only).
    #[must_use]
    pub const fn with_start_delay(mut self, ms: u64) -> Self {
        self.start_delay_ms = Some(ms);
        self
    }

    /// Set the progress bar width in fill characters.
    #[must_use]
    pub const fn with_progress_length(mut self, chars: usize) -> Self {
        self.progress_length = Some(chars);
        self
    }

    /// Set the progress bar fill glyph.
    #[must_use]
    pub const fn with_progress_char(mut self, fill: char) -> Self {
        self.progress_char = Some(fill);
        self
    }

    /// Set the percentage at which the bar stops.
    #[must_use]
    pub const fn with_progress_percent(mut self, percent: u32) -> Self {
        self.progress_percent = Some(percent);
        self
    }

    /// Set the cursor glyph for a typed line.
    #[must_use]
    pub const fn with_cursor(mut self, glyph: char) -> Self {
        self.cursor = Some(glyph);
        self
    }
}

//! Script compilation: descriptors in, renderable lines out.
//!
//! Compilation is a pure function. It never fails: unknown kinds become
//! plain lines, unparseable colors become uncolored, and absent fields
//! take the component defaults below.

use super::descriptor::LineDescriptor;
use crate::color::Rgb;
use std::time::Duration;

/// Delay between activation and the first line.
pub const DEFAULT_START_DELAY: Duration = Duration::from_millis(600);
/// Per-character delay for typed lines.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(40);
/// Trailing delay after each line.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(500);
/// Progress bar width in fill characters.
pub const DEFAULT_PROGRESS_LENGTH: usize = 40;
/// Progress bar fill glyph.
pub const DEFAULT_PROGRESS_CHAR: char = '█';
/// Percentage at which a bar stops ticking.
pub const DEFAULT_PROGRESS_PERCENT: u32 = 100;
/// Cursor glyph shown while a typed line animates.
pub const DEFAULT_CURSOR_GLYPH: char = '▋';

/// Rendering mode of a compiled line, carrying only the fields that
/// apply to that mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMode {
    /// Appended in full, immediately.
    Plain,
    /// Typed character by character.
    Input {
        /// Delay before each character.
        type_delay: Duration,
        /// Cursor glyph shown while typing.
        cursor: char,
    },
    /// Animated progress bar.
    Progress {
        /// Bar width in fill characters.
        length: usize,
        /// Fill glyph.
        fill: char,
        /// Percentage at which ticking stops.
        stop_percent: u32,
    },
}

/// One compiled line, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableLine {
    /// The line's full text (empty for progress lines).
    pub text: String,
    /// Resolved display color, if any.
    pub color: Option<Rgb>,
    /// Trailing delay after the line's effect completes.
    pub line_delay: Duration,
    /// Rendering mode with mode-specific attributes.
    pub mode: LineMode,
}

/// A fully compiled script: the resolved activation delay plus the
/// renderable lines, in descriptor order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledScript {
    /// Delay between activation and the first line.
    pub start_delay: Duration,
    /// Compiled lines, one per descriptor, same order.
    pub lines: Vec<RenderableLine>,
}

impl CompiledScript {
    /// Number of lines in the script.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Compile a descriptor list into a [`CompiledScript`].
///
/// Output length and order equal the input's. A `start_delay_ms` on the
/// first descriptor overrides the default activation delay; on any later
/// descriptor it is ignored.
pub fn compile(descriptors: &[LineDescriptor]) -> CompiledScript {
    let start_delay = descriptors
        .first()
        .and_then(|d| d.start_delay_ms)
        .map_or(DEFAULT_START_DELAY, Duration::from_millis);

    let lines = descriptors.iter().map(compile_line).collect();

    CompiledScript { start_delay, lines }
}

fn compile_line(descriptor: &LineDescriptor) -> RenderableLine {
    let mode = match descriptor.kind.as_deref() {
        Some("input") => LineMode::Input {
            type_delay: descriptor
                .type_delay_ms
                .map_or(DEFAULT_TYPE_DELAY, Duration::from_millis),
            cursor: descriptor.cursor.unwrap_or(DEFAULT_CURSOR_GLYPH),
        },
        Some("progress") => LineMode::Progress {
            length: descriptor.progress_length.unwrap_or(DEFAULT_PROGRESS_LENGTH),
            fill: descriptor.progress_char.unwrap_or(DEFAULT_PROGRESS_CHAR),
            stop_percent: descriptor
                .progress_percent
                .unwrap_or(DEFAULT_PROGRESS_PERCENT),
        },
        // Unknown or absent kind renders as a plain line.
        _ => LineMode::Plain,
    };

    RenderableLine {
        text: descriptor.value.clone().unwrap_or_default(),
        color: descriptor.color.as_deref().and_then(Rgb::parse),
        line_delay: descriptor
            .line_delay_ms
            .map_or(DEFAULT_LINE_DELAY, Duration::from_millis),
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_preserves_length_and_order() {
        let script = compile(&[
            LineDescriptor::input("first"),
            LineDescriptor::text("second"),
            LineDescriptor::progress(),
        ]);

        assert_eq!(script.len(), 3);
        assert_eq!(script.lines[0].text, "first");
        assert_eq!(script.lines[1].text, "second");
        assert!(matches!(script.lines[2].mode, LineMode::Progress { .. }));
    }

    #[test]
    fn test_defaults_applied() {
        let script = compile(&[LineDescriptor::input("ls"), LineDescriptor::progress()]);

        assert_eq!(script.start_delay, DEFAULT_START_DELAY);
        assert_eq!(
            script.lines[0].mode,
            LineMode::Input {
                type_delay: DEFAULT_TYPE_DELAY,
                cursor: DEFAULT_CURSOR_GLYPH,
            }
        );
        assert_eq!(script.lines[0].line_delay, DEFAULT_LINE_DELAY);
        assert_eq!(
            script.lines[1].mode,
            LineMode::Progress {
                length: DEFAULT_PROGRESS_LENGTH,
                fill: DEFAULT_PROGRESS_CHAR,
                stop_percent: DEFAULT_PROGRESS_PERCENT,
            }
        );
    }

    #[test]
    fn test_unknown_kind_degrades_to_plain() {
        let script = compile(&[LineDescriptor {
            value: Some(String::from("hello")),
            kind: Some(String::from("blinking")),
            ..LineDescriptor::default()
        }]);

        assert_eq!(script.lines[0].mode, LineMode::Plain);
    }

    #[test]
    fn test_start_delay_first_line_only() {
        let script = compile(&[
            LineDescriptor::text("a").with_start_delay(1000),
            LineDescriptor::text("b").with_start_delay(9999),
        ]);
        assert_eq!(script.start_delay, Duration::from_millis(1000));

        let script = compile(&[
            LineDescriptor::text("a"),
            LineDescriptor::text("b").with_start_delay(9999),
        ]);
        assert_eq!(script.start_delay, DEFAULT_START_DELAY);
    }

    #[test]
    fn test_color_resolution() {
        let script = compile(&[
            LineDescriptor::text("a").with_color("#4bfcd2"),
            LineDescriptor::text("b").with_color("no-such-color"),
            LineDescriptor::text("c"),
        ]);

        assert_eq!(script.lines[0].color, Some(Rgb::new(0x4b, 0xfc, 0xd2)));
        assert_eq!(script.lines[1].color, None);
        assert_eq!(script.lines[2].color, None);
    }

    #[test]
    fn test_missing_value_is_empty_text() {
        let script = compile(&[LineDescriptor::blank()]);
        assert_eq!(script.lines[0].text, "");
        assert_eq!(script.lines[0].mode, LineMode::Plain);
    }

    #[test]
    fn test_zero_delays_are_kept() {
        let script = compile(&[LineDescriptor::input("x")
            .with_type_delay(0)
            .with_line_delay(0)]);

        assert_eq!(script.lines[0].line_delay, Duration::ZERO);
        assert_eq!(
            script.lines[0].mode,
            LineMode::Input {
                type_delay: Duration::ZERO,
                cursor: DEFAULT_CURSOR_GLYPH,
            }
        );
    }
}

//! Mounts: the output boundary of the engine.
//!
//! The sequencer never touches a display directly. It emits [`OutputOp`]
//! mutations, and a [`Mount`] applies them to whatever the host mounted:
//! an in-memory [`MountRegion`], an ANSI terminal via [`AnsiMount`], or a
//! channel for cross-thread delivery.
//!
//! Mutations arrive in strict sequence order; a mount only writes, it is
//! never read by the engine.

mod ansi;
mod region;

pub use ansi::AnsiMount;
pub use region::MountRegion;

use crate::color::Rgb;
use crossbeam_channel::Sender;

/// One mutation of the mounted output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputOp {
    /// Remove all prior output (emitted once, on activation).
    Clear,
    /// Append a new line with the given text and color.
    Append {
        /// Initial text of the line (may be empty).
        text: String,
        /// Display color, if any.
        color: Option<Rgb>,
    },
    /// Replace the text of the most recently appended line.
    ReplaceLast {
        /// The line's new text.
        text: String,
    },
    /// Show the typing cursor glyph at the end of the last line.
    CursorOn {
        /// The glyph to display.
        glyph: char,
    },
    /// Hide the typing cursor glyph.
    CursorOff,
}

/// A sink for [`OutputOp`] mutations.
///
/// Implementations must apply operations in call order. They never fail
/// visibly: a mount that loses its backing output swallows the mutation.
pub trait Mount {
    /// Apply one mutation.
    fn apply(&mut self, op: OutputOp);
}

/// A channel mount: forwards every mutation to a receiver on another
/// thread. A disconnected receiver drops the mutation silently.
impl Mount for Sender<OutputOp> {
    fn apply(&mut self, op: OutputOp) {
        let _ = self.send(op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_channel_mount_forwards_ops() {
        let (mut tx, rx) = unbounded();
        tx.apply(OutputOp::Clear);
        tx.apply(OutputOp::Append {
            text: String::from("hi"),
            color: None,
        });

        assert_eq!(rx.try_recv(), Ok(OutputOp::Clear));
        assert!(matches!(rx.try_recv(), Ok(OutputOp::Append { .. })));
    }

    #[test]
    fn test_channel_mount_survives_disconnect() {
        let (mut tx, rx) = unbounded();
        drop(rx);
        // Must not panic or surface an error.
        tx.apply(OutputOp::Clear);
    }
}

//! # Termscript
//!
//! A scripted terminal-session animation engine.
//!
//! Termscript renders a declarative script of lines (plain text, typed
//! text, and animated progress bars) one at a time with configurable
//! delays, starting only once the host signals that the mount point has
//! become visible.
//!
//! ## Core Concepts
//!
//! - **Script compilation**: descriptors with optional attributes become
//!   fully-defaulted renderable lines, tagged by mode
//! - **Sequencing**: a state machine yields timed steps; lines never
//!   reorder or interleave
//! - **Effects**: plain append, grapheme-accurate typing with a cursor
//!   glyph, and a fixed-tick progress bar that can stop early
//! - **Mounts**: output is a stream of mutations applied to an
//!   in-memory region, an ANSI terminal, or a channel
//! - **One-shot activation**: a visibility latch that fires at most once
//!   and releases its observation resource
//!
//! ## Example
//!
//! ```rust,ignore
//! use termscript::{compile, LineDescriptor, MountRegion, Player, Sequencer, VisibilityGate};
//!
//! let script = compile(&[
//!     LineDescriptor::input("cargo run"),
//!     LineDescriptor::progress(),
//!     LineDescriptor::text("Finished.").with_color("#4bfcd2"),
//! ]);
//!
//! let player = Player::spawn(
//!     Sequencer::new(script),
//!     VisibilityGate::always(),
//!     MountRegion::new(80, 24),
//! );
//! player.wait();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod effect;
pub mod mount;
pub mod player;
pub mod script;
pub mod sequence;
pub mod visibility;

// Re-exports for convenience
pub use color::Rgb;
pub use mount::{AnsiMount, Mount, MountRegion, OutputOp};
pub use player::{Player, PlayerEvent};
pub use script::{compile, CompiledScript, LineDescriptor, LineMode, RenderableLine};
pub use sequence::{Phase, SequenceState, Sequencer, Step};
pub use visibility::{VisibilityGate, VisibilitySignal};

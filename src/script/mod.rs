//! Script: Declarative session scripts and their compilation.
//!
//! A script is an ordered list of [`LineDescriptor`] records supplied by
//! the host. [`compile`] turns them into [`RenderableLine`]s with every
//! optional attribute resolved to a concrete value, so the sequencer and
//! effects never perform presence checks at animation time.

mod compile;
mod descriptor;

pub use compile::{
    compile, CompiledScript, LineMode, RenderableLine, DEFAULT_CURSOR_GLYPH, DEFAULT_LINE_DELAY,
    DEFAULT_PROGRESS_CHAR, DEFAULT_PROGRESS_LENGTH, DEFAULT_PROGRESS_PERCENT, DEFAULT_START_DELAY,
    DEFAULT_TYPE_DELAY,
};
pub use descriptor::LineDescriptor;

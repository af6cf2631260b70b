//! Sequence lifecycle state.

/// Lifecycle phase of one sequencer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed but not yet armed. Transient; a sequencer arms
    /// itself before its constructor returns.
    #[default]
    Idle,
    /// Armed, waiting for the visibility gate to fire.
    WaitingVisible,
    /// Activated; lines are being rendered.
    Running,
    /// All lines rendered. Terminal: a remount needs a fresh sequencer.
    Done,
}

/// Mutable state of one sequencer instance. Created on mount, destroyed
/// on unmount; nothing persists across activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceState {
    /// Index of the line currently being rendered. Monotonically
    /// increasing from 0.
    pub cursor: usize,
    /// Current lifecycle phase.
    pub phase: Phase,
}

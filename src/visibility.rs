//! Visibility gate: one-shot activation trigger.
//!
//! The host owns a [`VisibilitySignal`] and flips it when the widget's
//! mount point first scrolls into view. The engine polls the paired
//! [`VisibilityGate`], which latches on the first observation and then
//! releases the shared flag, so the signal can never un-fire and the
//! observation costs nothing after activation.
//!
//! A host that cannot observe visibility at all uses
//! [`VisibilityGate::always`], which reports visible immediately. This
//! is the degraded-but-safe default.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-side handle: flip it when the widget becomes visible.
///
/// Cloneable so the host can hand it to whatever observes the viewport.
/// Flipping after the gate has latched (or been dropped) is a no-op.
#[derive(Debug, Clone)]
pub struct VisibilitySignal {
    flag: Arc<AtomicBool>,
}

impl VisibilitySignal {
    /// Mark the widget visible. Idempotent.
    pub fn mark_visible(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

/// Engine-side gate: a one-shot latch over the host's signal.
#[derive(Debug)]
pub struct VisibilityGate {
    /// Shared flag; dropped on first fire or on teardown, whichever
    /// comes first.
    flag: Option<Arc<AtomicBool>>,
    visible: bool,
}

impl VisibilityGate {
    /// Create a gate plus the host-side signal that fires it.
    pub fn observed() -> (Self, VisibilitySignal) {
        let flag = Arc::new(AtomicBool::new(false));
        let gate = Self {
            flag: Some(Arc::clone(&flag)),
            visible: false,
        };
        (gate, VisibilitySignal { flag })
    }

    /// A gate that reports visible immediately, for hosts without
    /// observation support.
    pub const fn always() -> Self {
        Self {
            flag: None,
            visible: true,
        }
    }

    /// Poll the gate. Latches `true` on the first observed signal and
    /// never reverts.
    pub fn poll(&mut self) -> bool {
        if self.visible {
            return true;
        }
        match &self.flag {
            Some(flag) => {
                if flag.load(Ordering::Relaxed) {
                    self.visible = true;
                    // Release the observation resource.
                    self.flag = None;
                }
            }
            // No observation mechanism: degrade to always visible.
            None => self.visible = true,
        }
        self.visible
    }

    /// Whether the observation resource has been released.
    pub const fn is_released(&self) -> bool {
        self.flag.is_none()
    }
}

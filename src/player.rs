//! Player: Dedicated thread that drives a sequencer in real time.
//!
//! The player owns the sequencer, the visibility gate, and the mount.
//! It honors every delay the sequencer yields and applies mutations in
//! step order. Cancellation is an explicit token (`Arc<AtomicBool>`)
//! checked at every suspension point and again immediately before each
//! mount mutation, so teardown never produces a trailing write.
//!
//! Progress is reported over a channel; use [`Player::events`] with
//! `select!` or `recv_timeout` to observe the run.

use crate::mount::Mount;
use crate::sequence::{Sequencer, Step};
use crate::visibility::VisibilityGate;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the player re-polls an unfired visibility gate.
const VISIBILITY_POLL: Duration = Duration::from_millis(10);

/// Granularity of cancellation checks inside a wait.
const CANCEL_POLL: Duration = Duration::from_millis(1);

/// Progress events emitted by the player thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The visibility gate fired and the sequence started.
    Activated,
    /// The line at this index finished, trailing delay included.
    LineCompleted(usize),
    /// Every line finished; the player thread is exiting.
    Finished,
    /// The player was torn down mid-sequence.
    Cancelled,
}

/// A sequencer running on its own thread.
pub struct Player {
    /// Handle to the player thread.
    handle: Option<JoinHandle<()>>,
    /// Cancellation token shared with the thread.
    cancel: Arc<AtomicBool>,
    /// Receiver for progress events.
    event_rx: Receiver<PlayerEvent>,
}

impl Player {
    /// Spawn a player driving `sequencer` against `mount`, gated by
    /// `gate`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the player thread.
    pub fn spawn<M>(sequencer: Sequencer, gate: VisibilityGate, mount: M) -> Self
    where
        M: Mount + Send + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = Arc::clone(&cancel);

        // Bounded with headroom for one event per line plus lifecycle.
        let (event_tx, event_rx) = bounded(64);

        let handle = thread::Builder::new()
            .name("termscript-player".to_string())
            .spawn(move || {
                run_loop(sequencer, gate, mount, &cancel_clone, &event_tx);
            })
            .expect("Failed to spawn player thread");

        Self {
            handle: Some(handle),
            cancel,
            event_rx,
        }
    }

    /// Get a reference to the event receiver.
    #[inline]
    pub const fn events(&self) -> &Receiver<PlayerEvent> {
        &self.event_rx
    }

    /// Signal the player to stop. No mutation follows this call's
    /// observation by the player thread.
    pub fn shutdown(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the player thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Wait for the player thread to finish without cancelling it.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Main player loop.
fn run_loop<M: Mount>(
    mut sequencer: Sequencer,
    mut gate: VisibilityGate,
    mut mount: M,
    cancel: &Arc<AtomicBool>,
    events: &Sender<PlayerEvent>,
) {
    loop {
        if cancel.load(Ordering::Relaxed) {
            let _ = events.try_send(PlayerEvent::Cancelled);
            return;
        }

        let cursor_before = sequencer.cursor();
        match sequencer.next_step() {
            Step::AwaitVisible => {
                if gate.poll() {
                    sequencer.notify_visible();
                    let _ = events.try_send(PlayerEvent::Activated);
                } else if !wait(VISIBILITY_POLL, cancel) {
                    let _ = events.try_send(PlayerEvent::Cancelled);
                    return;
                }
            }
            Step::Frame { delay, op } => {
                if sequencer.cursor() > cursor_before {
                    let _ = events.try_send(PlayerEvent::LineCompleted(cursor_before));
                }
                if !wait(delay, cancel) {
                    let _ = events.try_send(PlayerEvent::Cancelled);
                    return;
                }
                if let Some(op) = op {
                    // Re-check right before touching the mount so a
                    // teardown during the wait cannot leak a mutation.
                    if cancel.load(Ordering::Relaxed) {
                        let _ = events.try_send(PlayerEvent::Cancelled);
                        return;
                    }
                    mount.apply(op);
                }
            }
            Step::Done => {
                if sequencer.cursor() > cursor_before {
                    let _ = events.try_send(PlayerEvent::LineCompleted(cursor_before));
                }
                let _ = events.try_send(PlayerEvent::Finished);
                return;
            }
        }
    }
}

/// Sleep for `duration`, waking early if cancelled.
///
/// Returns `false` if the cancellation token fired.
fn wait(duration: Duration, cancel: &Arc<AtomicBool>) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(CANCEL_POLL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::OutputOp;
    use crate::script::{compile, LineDescriptor};
    use crossbeam_channel::unbounded;

    const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

    /// A script with near-zero delays so tests run fast.
    fn quick_script(descriptors: Vec<LineDescriptor>) -> Sequencer {
        let descriptors: Vec<_> = descriptors
            .into_iter()
            .map(|line| line.with_line_delay(1))
            .collect();
        let mut with_start = descriptors;
        if let Some(first) = with_start.first_mut() {
            first.start_delay_ms = Some(1);
        }
        Sequencer::new(compile(&with_start))
    }

    #[test]
    fn test_plays_script_in_order_and_finishes() {
        let (ops_tx, ops_rx) = unbounded::<OutputOp>();
        let sequencer = quick_script(vec![
            LineDescriptor::input("ab").with_type_delay(1),
            LineDescriptor::text("done"),
        ]);

        let player = Player::spawn(sequencer, VisibilityGate::always(), ops_tx);

        let mut saw_finished = false;
        for event in player.events().iter() {
            if event == PlayerEvent::Finished {
                saw_finished = true;
                break;
            }
        }
        assert!(saw_finished);
        player.wait();

        let ops: Vec<_> = ops_rx.try_iter().collect();
        assert_eq!(ops[0], OutputOp::Clear);
        let typed: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                OutputOp::ReplaceLast { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(typed, vec!["a", "ab"]);
        // The plain line lands after typing completed.
        let last_append = ops
            .iter()
            .rposition(|op| matches!(op, OutputOp::Append { .. }))
            .unwrap();
        let last_typing = ops
            .iter()
            .rposition(|op| matches!(op, OutputOp::ReplaceLast { .. }))
            .unwrap();
        assert!(last_typing < last_append);
    }

    #[test]
    fn test_reports_line_completions() {
        let (ops_tx, _ops_rx) = unbounded::<OutputOp>();
        let sequencer = quick_script(vec![
            LineDescriptor::text("one"),
            LineDescriptor::text("two"),
        ]);

        let player = Player::spawn(sequencer, VisibilityGate::always(), ops_tx);

        let mut completed = Vec::new();
        loop {
            match player.events().recv_timeout(EVENT_TIMEOUT).unwrap() {
                PlayerEvent::LineCompleted(index) => completed.push(index),
                PlayerEvent::Finished => break,
                _ => {}
            }
        }
        assert_eq!(completed, vec![0, 1]);
        player.wait();
    }

    #[test]
    fn test_does_not_start_until_visible() {
        let (ops_tx, ops_rx) = unbounded::<OutputOp>();
        let (gate, signal) = VisibilityGate::observed();
        let sequencer = quick_script(vec![LineDescriptor::text("late")]);

        let player = Player::spawn(sequencer, gate, ops_tx);

        // Not visible yet: no mutations may arrive.
        thread::sleep(Duration::from_millis(50));
        assert!(ops_rx.try_recv().is_err());

        signal.mark_visible();
        let event = player.events().recv_timeout(EVENT_TIMEOUT).unwrap();
        assert_eq!(event, PlayerEvent::Activated);

        loop {
            if player.events().recv_timeout(EVENT_TIMEOUT).unwrap() == PlayerEvent::Finished {
                break;
            }
        }
        player.wait();
        assert!(ops_rx.try_iter().any(
            |op| matches!(op, OutputOp::Append { ref text, .. } if text == "late")
        ));
    }

    #[test]
    fn test_shutdown_stops_mutations() {
        let (ops_tx, ops_rx) = unbounded::<OutputOp>();
        // A long typed line that would animate for several seconds.
        let sequencer = quick_script(vec![
            LineDescriptor::input("x".repeat(200)).with_type_delay(20)
        ]);

        let player = Player::spawn(sequencer, VisibilityGate::always(), ops_tx);

        // Let it get mid-way through typing, then tear it down.
        thread::sleep(Duration::from_millis(100));
        player.shutdown();

        let mut saw_cancelled = false;
        for event in player.events().iter() {
            if event == PlayerEvent::Cancelled {
                saw_cancelled = true;
                break;
            }
        }
        assert!(saw_cancelled);
        player.wait();

        // Drain everything emitted before the cancellation landed, then
        // verify silence.
        let _ = ops_rx.try_iter().count();
        thread::sleep(Duration::from_millis(50));
        assert!(ops_rx.try_recv().is_err());
    }

    #[test]
    fn test_teardown_before_visibility_is_clean() {
        let (ops_tx, ops_rx) = unbounded::<OutputOp>();
        let (gate, _signal) = VisibilityGate::observed();
        let sequencer = quick_script(vec![LineDescriptor::text("never")]);

        let player = Player::spawn(sequencer, gate, ops_tx);
        thread::sleep(Duration::from_millis(20));
        player.join();

        assert!(ops_rx.try_recv().is_err());
    }

    #[test]
    fn test_drop_cancels_the_thread() {
        let (ops_tx, ops_rx) = unbounded::<OutputOp>();
        let sequencer = quick_script(vec![
            LineDescriptor::input("y".repeat(200)).with_type_delay(20)
        ]);

        let player = Player::spawn(sequencer, VisibilityGate::always(), ops_tx);
        thread::sleep(Duration::from_millis(50));
        drop(player);

        // Once the channel disconnects the thread has exited.
        while ops_rx.recv_timeout(EVENT_TIMEOUT).is_ok() {}
    }
}

//! The cancellable single-shot timer behind the long-press gesture.

use std::time::Duration;

use quanta::{Clock, Instant};

use super::events::GestureId;

#[derive(Clone, Copy, Debug)]
struct Pending {
    gesture: GestureId,
    deadline: Instant,
}

/// Deadline tracker for at most one pending long press.
///
/// The timer never calls back on its own. The owner polls it with
/// [`take_due`](Self::take_due) between ticks, so a fired press can never
/// interleave with a running physics step, and a [`cancel`](Self::cancel)
/// always wins over a poll made after it.
#[derive(Clone, Debug)]
pub struct LongPressTimer {
    clock: Clock,
    duration: Duration,
    pending: Option<Pending>,
}

impl LongPressTimer {
    pub fn new(clock: Clock, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            pending: None,
        }
    }

    /// Starts the countdown for `gesture`, replacing any pending one.
    pub fn arm(&mut self, gesture: GestureId) {
        let deadline = self.clock.now() + self.duration;
        self.pending = Some(Pending { gesture, deadline });
    }

    /// Drops the pending countdown. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending gesture once its deadline has passed.
    ///
    /// Each armed gesture is returned at most once.
    pub fn take_due(&mut self) -> Option<GestureId> {
        let pending = self.pending?;
        if self.clock.now() < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.gesture)
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

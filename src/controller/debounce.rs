use std::time::{Duration, Instant};

/// Single-shot quiet-period timer
///
/// Each `schedule` replaces the previous deadline, so only the most recent
/// schedule can ever fire; superseded ones are fully cancelled, not merely
/// ignored. Poll-driven: the owner calls [`Debouncer::fire`] on its tick and
/// acts when it returns true.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet period as of `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Drop any pending schedule without firing it
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per schedule, the first time `now` reaches the
    /// deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

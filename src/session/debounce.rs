use std::time::{Duration, Instant};

/// Coalesces bursts of requests into a single action on the latest value.
///
/// Each [`schedule`](Self::schedule) replaces any pending value and
/// restarts the delay. [`poll`](Self::poll) hands the value out once the
/// delay has elapsed without a newer request. Time is passed in explicitly
/// so callers drive it from their own event loop.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to fire `delay` after `now`, cancelling any
    /// pending value. Returns `true` if a pending value was replaced.
    pub fn schedule(&mut self, now: Instant, value: T) -> bool {
        self.pending.replace((now + self.delay, value)).is_some()
    }

    /// Returns the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drops the pending value, if any, and returns it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// Returns `true` while a value is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}

//! Debounced value propagation.
//!
//! A [`Debouncer`] tracks a rapidly changing input value but commits it only
//! once the input has been quiet for the configured delay. Like the
//! celebration timer it operates on wall-clock deadlines with no internal
//! threads -- the caller is responsible for calling `tick()` periodically.
//!
//! Every `set` replaces the pending value and restarts the quiet window
//! (last-value-wins); values observed strictly inside a quiet window are
//! never committed. `cancel()` drops any pending commit so nothing fires
//! after the owning component is torn down.

struct Pending<T> {
    value: T,
    deadline_ms: u64,
}

/// Generic quiet-window value propagator.
pub struct Debouncer<T> {
    committed: Option<T>,
    pending: Option<Pending<T>>,
    delay_ms: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with no committed value yet.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            committed: None,
            pending: None,
            delay_ms,
        }
    }

    /// Create a debouncer whose committed value starts at `value`.
    pub fn with_initial(value: T, delay_ms: u64) -> Self {
        Self {
            committed: Some(value),
            pending: None,
            delay_ms,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The last committed value. Pending values are never visible here.
    pub fn value(&self) -> Option<&T> {
        self.committed.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record a new input value, restarting the quiet window.
    pub fn set(&mut self, value: T) {
        self.set_at(value, now_ms());
    }

    /// Deterministic variant of [`set`](Self::set) for hosts that carry
    /// their own clock.
    pub fn set_at(&mut self, value: T, now_ms: u64) {
        // Replacing the pending entry cancels the previous deadline.
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Call periodically. Commits and returns the pending value once the
    /// quiet window has elapsed.
    pub fn tick(&mut self) -> Option<&T> {
        self.tick_at(now_ms())
    }

    /// Deterministic variant of [`tick`](Self::tick).
    pub fn tick_at(&mut self, now_ms: u64) -> Option<&T> {
        let due = matches!(&self.pending, Some(p) if now_ms >= p.deadline_ms);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.committed = Some(pending.value);
        self.committed.as_ref()
    }

    /// Drop any pending commit. Idempotent; nothing fires afterwards.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_000_000;

    #[test]
    fn commits_only_after_quiet_window() {
        let mut debouncer = Debouncer::new(300);
        debouncer.set_at("a", T0);
        assert_eq!(debouncer.tick_at(T0 + 299), None);
        assert_eq!(debouncer.tick_at(T0 + 300), Some(&"a"));
        assert_eq!(debouncer.value(), Some(&"a"));
    }

    #[test]
    fn rapid_changes_commit_only_the_latest() {
        let mut debouncer = Debouncer::new(300);
        debouncer.set_at(1, T0);
        debouncer.set_at(2, T0 + 100);
        debouncer.set_at(3, T0 + 200);
        // The first two deadlines were cancelled by re-arming.
        assert_eq!(debouncer.tick_at(T0 + 400), None);
        assert_eq!(debouncer.tick_at(T0 + 500), Some(&3));
        assert_eq!(debouncer.value(), Some(&3));
    }

    #[test]
    fn intermediate_values_are_never_observable() {
        let mut debouncer = Debouncer::with_initial(0, 200);
        debouncer.set_at(1, T0);
        assert_eq!(debouncer.value(), Some(&0));
        debouncer.set_at(2, T0 + 50);
        assert_eq!(debouncer.tick_at(T0 + 199), None);
        assert_eq!(debouncer.value(), Some(&0));
        debouncer.tick_at(T0 + 250);
        assert_eq!(debouncer.value(), Some(&2));
    }

    #[test]
    fn commit_fires_once() {
        let mut debouncer = Debouncer::new(100);
        debouncer.set_at(7, T0);
        assert!(debouncer.tick_at(T0 + 100).is_some());
        assert!(debouncer.tick_at(T0 + 200).is_none());
    }

    #[test]
    fn cancel_prevents_stale_commit() {
        let mut debouncer = Debouncer::new(100);
        debouncer.set_at("stale", T0);
        debouncer.cancel();
        debouncer.cancel(); // idempotent
        assert_eq!(debouncer.tick_at(T0 + 10_000), None);
        assert_eq!(debouncer.value(), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn set_after_cancel_rearms() {
        let mut debouncer = Debouncer::new(100);
        debouncer.set_at(1, T0);
        debouncer.cancel();
        debouncer.set_at(2, T0 + 50);
        assert_eq!(debouncer.tick_at(T0 + 150), Some(&2));
    }
}

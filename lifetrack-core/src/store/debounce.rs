//! Save coalescing for bursts of edits.

use std::time::{Duration, Instant};

/// Default quiet period before a dirty journal is flushed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Coalesces rapid successive edits into one save.
///
/// The owner marks the state dirty after each edit and periodically offers
/// to flush; a flush is only due once the quiet period has passed since the
/// most recent edit. Each instance is owned by the session that created it,
/// so two sessions never share flush state.
#[derive(Debug)]
pub struct DebouncedSaver {
    delay: Duration,
    dirty_at: Option<Instant>,
}

impl Default for DebouncedSaver {
    fn default() -> Self {
        DebouncedSaver::new(DEFAULT_DELAY)
    }
}

impl DebouncedSaver {
    pub fn new(delay: Duration) -> Self {
        DebouncedSaver {
            delay,
            dirty_at: None,
        }
    }

    /// Record an edit at `now`. Every edit pushes the deadline back.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.dirty_at = Some(now);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_at.is_some()
    }

    /// Whether the quiet period has elapsed at `now`. Clears the dirty flag
    /// when it has, so a save is owed exactly once per burst.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.dirty_at {
            Some(t) if now.duration_since(t) >= self.delay => {
                self.dirty_at = None;
                true
            }
            _ => false,
        }
    }

    /// Unconditional flush (session end). Clears the dirty flag and returns
    /// whether a save is owed.
    pub fn take_pending(&mut self) -> bool {
        self.dirty_at.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_delay() {
        let t0 = Instant::now();
        let mut saver = DebouncedSaver::new(Duration::from_millis(500));

        saver.mark_dirty(t0);
        assert!(!saver.take_due(t0 + Duration::from_millis(100)));
        assert!(saver.is_dirty());
    }

    #[test]
    fn due_after_quiet_period() {
        let t0 = Instant::now();
        let mut saver = DebouncedSaver::new(Duration::from_millis(500));

        saver.mark_dirty(t0);
        assert!(saver.take_due(t0 + Duration::from_millis(600)));
        // Only owed once
        assert!(!saver.take_due(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn new_edits_push_the_deadline_back() {
        let t0 = Instant::now();
        let mut saver = DebouncedSaver::new(Duration::from_millis(500));

        saver.mark_dirty(t0);
        saver.mark_dirty(t0 + Duration::from_millis(400));
        assert!(!saver.take_due(t0 + Duration::from_millis(600)));
        assert!(saver.take_due(t0 + Duration::from_millis(900)));
    }

    #[test]
    fn take_pending_flushes_unconditionally() {
        let t0 = Instant::now();
        let mut saver = DebouncedSaver::default();

        assert!(!saver.take_pending());
        saver.mark_dirty(t0);
        assert!(saver.take_pending());
        assert!(!saver.is_dirty());
    }
}

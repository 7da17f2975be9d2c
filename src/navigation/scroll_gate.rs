use std::time::{Duration, Instant};

pub const DEFAULT_GATE_WINDOW: Duration = Duration::from_millis(800);

/// Lets at most one scroll-driven section change through per window.
///
/// Closing the gate schedules a reopen deadline. A new deadline replaces any
/// pending one, so there is never more than one reopen in flight. The deadline
/// is fired lazily by whichever call observes it first ([`ScrollGate::poll`] from
/// the event loop, or [`ScrollGate::try_pass`] itself).
#[derive(Debug, Clone)]
pub struct ScrollGate {
    can_scroll: bool,
    reopen_at: Option<Instant>,
    window: Duration,
}

impl Default for ScrollGate {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_WINDOW)
    }
}

impl ScrollGate {
    pub fn new(window: Duration) -> Self {
        Self {
            can_scroll: true,
            reopen_at: None,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_open(&self) -> bool {
        self.can_scroll
    }

    /// Pending reopen instant, if the gate is closed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reopen_at
    }

    /// Fires the reopen timer if it is due. Returns true when the gate reopened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.reopen_at {
            Some(deadline) if now >= deadline => {
                self.reopen_at = None;
                self.can_scroll = true;
                true
            }
            _ => false,
        }
    }

    /// Consumes the open gate. On success the gate closes and a fresh reopen
    /// deadline of `now + window` replaces whatever was pending.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        self.poll(now);
        if !self.can_scroll {
            return false;
        }
        self.can_scroll = false;
        self.reopen_at = Some(now + self.window);
        true
    }
}

//! Reload debounce state machine.
//!
//! Coalesces a burst of out-of-buffer seeks into a single source reload.
//! The window opens at the first seek of a burst; seeks landing inside the
//! window replace the pending target without extending the window, so
//! exactly one reload fires per burst, carrying the newest target.

use std::time::{Duration, Instant};

/// Width of the coalescing window.
pub(crate) const RELOAD_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pending { target: f64, deadline: Instant },
    InFlight { target: f64 },
}

#[derive(Debug, Clone)]
pub(crate) struct ReloadDebounce {
    phase: Phase,
}

impl ReloadDebounce {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Record a reload target.
    ///
    /// Opens a window when idle (or when a previous reload is in flight);
    /// inside an open window only the target is replaced.
    pub fn request(&mut self, target: f64, now: Instant) {
        self.phase = match self.phase {
            Phase::Idle | Phase::InFlight { .. } => Phase::Pending {
                target,
                deadline: now + RELOAD_DEBOUNCE,
            },
            Phase::Pending { deadline, .. } => Phase::Pending { target, deadline },
        };
    }

    /// Fire the pending reload once its window has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<f64> {
        match self.phase {
            Phase::Pending { target, deadline } if now >= deadline => {
                self.phase = Phase::InFlight { target };
                Some(target)
            }
            _ => None,
        }
    }

    /// The fired reload finished (successfully or not).
    pub fn settle(&mut self) {
        if matches!(self.phase, Phase::InFlight { .. }) {
            self.phase = Phase::Idle;
        }
    }

    /// Drop any pending target without firing.
    pub fn cancel_pending(&mut self) {
        if matches!(self.phase, Phase::Pending { .. }) {
            self.phase = Phase::Idle;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Instant at which [`fire`](Self::fire) will produce a target, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Pending { deadline, .. } => Some(deadline),
            _ => None,
        }
    }
}

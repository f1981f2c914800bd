//! Cancellable one-shot clears keyed by a generation counter.
//!
//! Every schedule or cancel bumps the generation, so a ticket handed out
//! earlier can never fire against state set up by a later event.

use std::time::{Duration, Instant};

/// Handle for one scheduled clear. Given back to [`DeferredClear::fire`]
/// by whatever timer the host runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTicket {
    generation: u64,
    delay: Duration,
}

impl ClearTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    generation: u64,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct DeferredClear {
    generation: u64,
    pending: Option<Pending>,
}

impl DeferredClear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a clear `delay` after `now`, superseding any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> ClearTicket {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            deadline: now + delay,
        });
        ClearTicket {
            generation: self.generation,
            delay,
        }
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending clear if `ticket` is still the current one.
    pub fn fire(&mut self, ticket: ClearTicket) -> bool {
        match self.pending {
            Some(p) if p.generation == ticket.generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending clear if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

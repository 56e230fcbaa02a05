//! Simulation clock - fixed-interval descent ticks
//!
//! The clock accumulates caller-supplied elapsed time. A tick fires as soon as the
//! accumulated time passes the scheduled threshold, and the next threshold is then
//! placed one interval after the *current* time. A caller that stalls for several
//! intervals therefore gets a single tick, never a burst.

use crate::types::DESCENT_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    interval_ms: u32,
    elapsed_ms: u64,
    next_tick_ms: u64,
}

impl SimulationClock {
    /// Create a clock firing every `interval_ms`
    ///
    /// The first threshold is 0, so the first non-zero advance ticks immediately.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            next_tick_ms: 0,
        }
    }

    /// Add `delta_ms` to the accumulated time; returns whether a tick fired
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms += u64::from(delta_ms);
        if self.next_tick_ms < self.elapsed_ms {
            self.next_tick_ms = self.elapsed_ms + u64::from(self.interval_ms);
            return true;
        }
        false
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn next_tick_ms(&self) -> u64 {
        self.next_tick_ms
    }

    /// Time left before the next tick can fire
    pub fn until_next_tick_ms(&self) -> u64 {
        self.next_tick_ms.saturating_sub(self.elapsed_ms)
    }

    /// Forget all accumulated time
    pub fn reset(&mut self) {
        *self = Self::new(self.interval_ms);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DESCENT_INTERVAL_MS)
    }
}

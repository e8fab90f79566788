// SPDX-License-Identifier: MPL-2.0
//! Debouncer for bursty inputs (the search entry fires on every keystroke).
//!
//! Each call to [`Debouncer::schedule`] bumps an internal generation and
//! returns a future that resolves after the configured delay, carrying the
//! generation it was scheduled under. The shell runs the future as a task
//! and, on completion, asks [`Debouncer::is_current`] whether the timer is
//! still the latest one. Earlier timers still resolve, but their stale
//! generations are ignored, which collapses a burst of calls into exactly
//! one acted-upon firing with the latest input.

use std::future::Future;
use std::time::Duration;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    /// Starts a new debounce window, invalidating every pending one.
    /// The returned future resolves to its own generation after the delay.
    pub fn schedule(&mut self) -> impl Future<Output = u64> {
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            generation
        }
    }

    /// Whether a fired timer belongs to the most recent `schedule` call.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Generation of the most recent `schedule` call.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

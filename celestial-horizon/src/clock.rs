//! Monotonic millisecond time sources.
//!
//! The hand controller's timer is a 32-bit millisecond counter that wraps
//! roughly every 49.7 days. [`Clock`] reproduces that contract so elapsed time
//! is always computed as `now.wrapping_sub(then)` and survives the wrap.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

pub trait Clock {
    /// Milliseconds since an arbitrary origin, wrapping at `u32::MAX`.
    fn millis(&self) -> u32;
}

/// Wall-clock source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        // Truncation to 32 bits is the wrapping counter.
        self.origin.elapsed().as_millis() as u32
    }
}

/// Hand-driven clock for tests and simulation.
///
/// Clones share the same counter, so a test can keep one handle and move time
/// forward while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(millis: u32) -> Self {
        let clock = Self::new();
        clock.set(millis);
        clock
    }

    pub fn set(&self, millis: u32) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}

//! Local sidereal time extrapolated from a caller-supplied baseline.
//!
//! The controller learns LST from the mount once and then advances it locally
//! by the solar-to-sidereal rate. There is no periodic resynchronization: the
//! estimate drifts with the local clock until the caller sets a new baseline.

use crate::constants::{DEGREES_PER_HOUR, MILLIS_PER_SECOND, SECONDS_PER_HOUR, SIDEREAL_RATE};

/// An LST reading and the counter value at which it was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealBaseline {
    lst_hours: f64,
    captured_at_ms: u32,
}

impl SiderealBaseline {
    pub fn new(lst_hours: f64, captured_at_ms: u32) -> Self {
        Self {
            lst_hours,
            captured_at_ms,
        }
    }

    pub fn lst_hours(&self) -> f64 {
        self.lst_hours
    }

    pub fn captured_at_ms(&self) -> u32 {
        self.captured_at_ms
    }

    /// LST in hours at counter value `now_ms`.
    ///
    /// The result is not wrapped to 24h; callers normalize hour angles instead.
    pub fn lst_hours_at(&self, now_ms: u32) -> f64 {
        let elapsed_ms = now_ms.wrapping_sub(self.captured_at_ms);
        let sidereal_seconds = (f64::from(elapsed_ms) / MILLIS_PER_SECOND) * SIDEREAL_RATE;
        self.lst_hours + sidereal_seconds / SECONDS_PER_HOUR
    }

    pub fn lst_degrees_at(&self, now_ms: u32) -> f64 {
        self.lst_hours_at(now_ms) * DEGREES_PER_HOUR
    }
}

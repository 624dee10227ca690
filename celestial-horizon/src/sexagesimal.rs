//! Whole-unit sexagesimal splits for the controller display.
//!
//! Components are truncated, not rounded: 12.99999h shows as `12h 59m 59s`.
//! [`Dms`] keeps the sign apart from the magnitude so that −0.5° reads as
//! `-00° 30' 00"` instead of losing the sign on a zero degree field.

use core::fmt;

/// Hours, minutes, seconds of a non-negative hour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Sign plus degrees, arcminutes, arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

/// Splits a non-negative value into (whole, minutes, seconds).
fn split(value: f64) -> (f64, f64, f64) {
    let whole = libm::floor(value);
    let minutes = (value - whole) * 60.0;
    let seconds = (minutes - libm::floor(minutes)) * 60.0;
    (whole, minutes, seconds)
}

impl Hms {
    pub fn from_hours(hours: f64) -> Self {
        let (h, m, s) = split(hours);
        Self {
            hours: h as u8,
            minutes: m as u8,
            seconds: s as u8,
        }
    }
}

impl Dms {
    pub fn from_degrees(degrees: f64) -> Self {
        let negative = degrees < 0.0;
        let (d, m, s) = split(degrees.abs());
        Self {
            negative,
            degrees: d as u16,
            minutes: m as u8,
            seconds: s as u8,
        }
    }

    /// Degree field with the sign applied. Zero for −0.5°; check `negative`.
    pub fn signed_degrees(&self) -> i32 {
        let d = i32::from(self.degrees);
        if self.negative {
            -d
        } else {
            d
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(
            f,
            "{}{:02}° {:02}' {:02}\"",
            sign, self.degrees, self.minutes, self.seconds
        )
    }
}

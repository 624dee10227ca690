//! Empirical atmospheric refraction.
//!
//! Uses Sæmundsson's formula for refraction as a function of *true*
//! (airless) altitude, scaled for pressure and temperature:
//!
//! ```text
//! R = 1.02 · cot(h + 10.3 / (h + 5.11)) · (P / 1010) · (283 / (273 + T))
//! ```
//!
//! with `h` in degrees, `R` in arcminutes, `P` in millibars and `T` in °C.
//! Negative results (well below the horizon) are clamped to zero.

use crate::constants::{
    DEG_TO_RAD, KELVIN_OFFSET, STANDARD_PRESSURE_MB, STANDARD_TEMPERATURE_C,
};
use crate::error::{require_finite, Result};
use crate::math::cot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local atmospheric conditions for refraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atmosphere {
    pub pressure_mb: f64,
    pub temperature_c: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            pressure_mb: STANDARD_PRESSURE_MB,
            temperature_c: STANDARD_TEMPERATURE_C,
        }
    }
}

impl Atmosphere {
    pub fn new(pressure_mb: f64, temperature_c: f64) -> Result<Self> {
        Ok(Self {
            pressure_mb: require_finite("pressure", pressure_mb)?,
            temperature_c: require_finite("temperature", temperature_c)?,
        })
    }

    /// Pressure/temperature scale factor relative to the reference conditions.
    pub fn scale(&self) -> f64 {
        (self.pressure_mb / STANDARD_PRESSURE_MB)
            * ((KELVIN_OFFSET + STANDARD_TEMPERATURE_C) / (KELVIN_OFFSET + self.temperature_c))
    }
}

/// Refraction in arcminutes at true altitude `alt_deg`.
pub fn true_refraction(alt_deg: f64, atmosphere: &Atmosphere) -> f64 {
    let argument = (alt_deg + 10.3 / (alt_deg + 5.11)) * DEG_TO_RAD;
    let r = 1.02 * cot(argument) * atmosphere.scale();
    // f64::max also maps NaN near the formula's pole to zero.
    r.max(0.0)
}

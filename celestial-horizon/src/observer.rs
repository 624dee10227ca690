use crate::constants::DEG_TO_RAD;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observer geodetic latitude with its sine and cosine cached.
///
/// Every frame conversion needs both, so they are computed once when the
/// latitude is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Latitude {
    degrees: f64,
    sin: f64,
    cos: f64,
}

impl Latitude {
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || degrees.abs() > 90.0 {
            return Err(Error::InvalidLatitude(degrees));
        }
        let (sin, cos) = libm::sincos(degrees * DEG_TO_RAD);
        Ok(Self { degrees, sin, cos })
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }
}

impl TryFrom<f64> for Latitude {
    type Error = Error;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> f64 {
        latitude.degrees
    }
}

//! Equatorial ↔ horizontal conversion for a fixed observer latitude.
//!
//! Azimuth is measured from north through east. The raw `atan2` of the
//! spherical-triangle solution is measured from south, so both directions add
//! 180° before wrapping to [0, 360). The same formula serves both directions:
//! swapping (hour angle, declination) with (azimuth, altitude) in the
//! pole-zenith-object triangle gives the inverse transform.

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};
use crate::math::wrap_360;
use crate::observer::Latitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoord {
    /// Right ascension in degrees.
    pub ra_deg: f64,
    pub dec_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoord {
    pub alt_deg: f64,
    /// Azimuth in [0, 360), north = 0, east = 90.
    pub azm_deg: f64,
}

impl EquatorialCoord {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }
}

impl HorizontalCoord {
    pub fn new(alt_deg: f64, azm_deg: f64) -> Self {
        Self { alt_deg, azm_deg }
    }
}

/// Solves the pole-zenith-object triangle for one side.
///
/// Given an angle at one vertex (`angle_deg`) and the elevation of the object
/// above that vertex's great circle (`elevation_deg`), returns the elevation
/// and angle seen from the other vertex, the latter already shifted to be
/// measured from north (or from the meridian) and wrapped to [0, 360).
fn solve_triangle(angle_deg: f64, elevation_deg: f64, latitude: &Latitude) -> (f64, f64) {
    let angle = angle_deg * DEG_TO_RAD;
    let elevation = elevation_deg * DEG_TO_RAD;
    let (sin_lat, cos_lat) = (latitude.sin(), latitude.cos());
    let (sin_a, cos_a) = libm::sincos(angle);

    let sin_out = libm::sin(elevation) * sin_lat + libm::cos(elevation) * cos_lat * cos_a;
    let out_elevation = libm::asin(sin_out.clamp(-1.0, 1.0)) * RAD_TO_DEG;

    let t1 = sin_a;
    let t2 = cos_a * sin_lat - libm::tan(elevation) * cos_lat;
    let out_angle = wrap_360(libm::atan2(t1, t2) * RAD_TO_DEG + 180.0);

    (out_elevation, out_angle)
}

/// Converts RA/Dec to Alt/Azm given the local sidereal time in degrees.
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    latitude: &Latitude,
) -> HorizontalCoord {
    let hour_angle = wrap_360(lst_deg - ra_deg);
    let (alt_deg, azm_deg) = solve_triangle(hour_angle, dec_deg, latitude);
    HorizontalCoord { alt_deg, azm_deg }
}

/// Converts Alt/Azm back to RA/Dec; RA is wrapped to [0, 360).
pub fn horizontal_to_equatorial(
    alt_deg: f64,
    azm_deg: f64,
    lst_deg: f64,
    latitude: &Latitude,
) -> EquatorialCoord {
    let (dec_deg, hour_angle) = solve_triangle(wrap_360(azm_deg), alt_deg, latitude);
    EquatorialCoord {
        ra_deg: wrap_360(lst_deg - hour_angle),
        dec_deg,
    }
}

/// Great-circle distance in degrees by the spherical law of cosines.
pub fn angular_distance(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let (sin_d1, cos_d1) = libm::sincos(dec1_deg * DEG_TO_RAD);
    let (sin_d2, cos_d2) = libm::sincos(dec2_deg * DEG_TO_RAD);
    let cos_sep = sin_d1 * sin_d2 + cos_d1 * cos_d2 * libm::cos((ra1_deg - ra2_deg) * DEG_TO_RAD);
    libm::acos(cos_sep.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

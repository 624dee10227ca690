//! Stateful observer context: latitude, sidereal baseline and last pointing.
//!
//! The engine is *initialized* once both a latitude and an LST baseline have
//! been supplied. Until then the frame conversions return `None` and
//! [`CoordinateEngine::topocentric_to_observed_place`] passes its input
//! through untouched.

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::constants::{ARCMIN_PER_DEGREE, DEGREES_PER_HOUR};
use crate::error::{require_finite, Result};
use crate::observer::Latitude;
use crate::refraction::{true_refraction, Atmosphere};
use crate::sidereal::SiderealBaseline;
use crate::transform::{
    equatorial_to_horizontal, horizontal_to_equatorial, EquatorialCoord, HorizontalCoord,
};

pub struct CoordinateEngine<C: Clock = SystemClock> {
    clock: C,
    latitude: Option<Latitude>,
    baseline: Option<SiderealBaseline>,
    atmosphere: Atmosphere,
    last_telescope: EquatorialCoord,
}

impl CoordinateEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for CoordinateEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CoordinateEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            latitude: None,
            baseline: None,
            atmosphere: Atmosphere::default(),
            last_telescope: EquatorialCoord::new(0.0, 0.0),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn set_latitude(&mut self, degrees: f64) -> Result<()> {
        let latitude = Latitude::from_degrees(degrees)?;
        debug!("observer latitude set to {degrees:.4}°");
        self.latitude = Some(latitude);
        Ok(())
    }

    pub fn clear_latitude(&mut self) {
        self.latitude = None;
    }

    pub fn latitude(&self) -> Option<&Latitude> {
        self.latitude.as_ref()
    }

    /// Captures `lst_hours` as the sidereal baseline at the current clock tick.
    pub fn set_lst_baseline(&mut self, lst_hours: f64) -> Result<()> {
        let lst_hours = require_finite("sidereal time", lst_hours)?;
        let now = self.clock.millis();
        debug!("sidereal baseline set to {lst_hours:.6}h at tick {now}");
        self.baseline = Some(SiderealBaseline::new(lst_hours, now));
        Ok(())
    }

    pub fn baseline(&self) -> Option<&SiderealBaseline> {
        self.baseline.as_ref()
    }

    pub fn set_atmosphere(&mut self, atmosphere: Atmosphere) {
        self.atmosphere = atmosphere;
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// Records where the telescope was last commanded, RA and Dec in degrees.
    pub fn set_last_telescope_equatorial(&mut self, ra_deg: f64, dec_deg: f64) {
        self.last_telescope = EquatorialCoord::new(ra_deg, dec_deg);
    }

    pub fn last_telescope_equatorial(&self) -> EquatorialCoord {
        self.last_telescope
    }

    pub fn is_initialized(&self) -> bool {
        self.latitude.is_some() && self.baseline.is_some()
    }

    /// Extrapolated LST in hours, or 0 with no baseline.
    pub fn lst_hours(&self) -> f64 {
        self.baseline
            .map_or(0.0, |b| b.lst_hours_at(self.clock.millis()))
    }

    pub fn lst_degrees(&self) -> f64 {
        self.lst_hours() * DEGREES_PER_HOUR
    }

    pub fn ha_to_ra(&self, ha_deg: f64) -> f64 {
        self.lst_degrees() - ha_deg
    }

    /// Latitude and live LST in degrees, when both are known.
    fn observer(&self) -> Option<(&Latitude, f64)> {
        let latitude = self.latitude.as_ref()?;
        let baseline = self.baseline.as_ref()?;
        Some((latitude, baseline.lst_degrees_at(self.clock.millis())))
    }

    pub fn equ_to_hor(&self, ra_deg: f64, dec_deg: f64) -> Option<HorizontalCoord> {
        let (latitude, lst_deg) = self.observer()?;
        Some(equatorial_to_horizontal(ra_deg, dec_deg, lst_deg, latitude))
    }

    pub fn hor_to_equ(&self, alt_deg: f64, azm_deg: f64) -> Option<EquatorialCoord> {
        let (latitude, lst_deg) = self.observer()?;
        Some(horizontal_to_equatorial(alt_deg, azm_deg, lst_deg, latitude))
    }

    /// Refraction in arcminutes under the configured atmosphere.
    pub fn true_refraction(&self, alt_deg: f64) -> f64 {
        true_refraction(alt_deg, &self.atmosphere)
    }

    /// Lifts a topocentric place to the observed (refracted) place.
    ///
    /// RA is in hours, Dec in degrees. The correction is applied in the
    /// horizontal frame: convert, raise the altitude by the refraction, and
    /// convert back.
    pub fn topocentric_to_observed_place(&self, ra_hours: f64, dec_deg: f64) -> (f64, f64) {
        let Some((latitude, lst_deg)) = self.observer() else {
            return (ra_hours, dec_deg);
        };
        let hor = equatorial_to_horizontal(ra_hours * DEGREES_PER_HOUR, dec_deg, lst_deg, latitude);
        let apparent_alt = hor.alt_deg + true_refraction(hor.alt_deg, &self.atmosphere) / ARCMIN_PER_DEGREE;
        let equ = horizontal_to_equatorial(apparent_alt, hor.azm_deg, lst_deg, latitude);
        (equ.ra_deg / DEGREES_PER_HOUR, equ.dec_deg)
    }
}

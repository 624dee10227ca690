//! Filter mask and per-predicate thresholds.
//!
//! Parameterized filters take a small index from the menu layer and map it
//! through a fixed table. Indices past the end of a table select the table's
//! fallback, which leaves the predicate effectively open.

use bitflags::bitflags;
use log::debug;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct FilterMode: u16 {
        const ABOVE_HORIZON = 1 << 0;
        const CONSTELLATION = 1 << 1;
        const BY_MAGNITUDE = 1 << 2;
        const NEARBY = 1 << 3;
        const OBJECT_TYPE = 1 << 4;
        const DBL_MIN_SEPARATION = 1 << 5;
        const DBL_MAX_SEPARATION = 1 << 6;
        const VAR_MAX_PERIOD = 1 << 7;
        const ALIGN_ALL_SKY = 1 << 8;
    }
}

impl FilterMode {
    /// Looks up a single flag by name, ignoring case and accepting `-` for `_`.
    pub fn parse_name(name: &str) -> Result<Self> {
        let wanted = name.trim().to_ascii_uppercase().replace('-', "_");
        Self::from_name(&wanted).ok_or_else(|| Error::UnknownFilter(name.to_string()))
    }
}

pub const MAGNITUDE_LIMITS: [f64; 7] = [10.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
pub const NEARBY_DISTANCES: [f64; 4] = [1.0, 5.0, 10.0, 15.0];
pub const DBL_MIN_SEPARATIONS: [f64; 10] = [0.2, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0, 20.0, 50.0];
pub const DBL_MAX_SEPARATIONS: [f64; 10] = [0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0, 20.0, 50.0, 100.0];
pub const VAR_MAX_PERIODS: [f64; 8] = [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

/// A table-driven filter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Magnitude ceiling.
    Magnitude,
    /// Degrees from the last telescope position.
    NearbyDistance,
    /// Arcseconds.
    DblMinSeparation,
    /// Arcseconds.
    DblMaxSeparation,
    /// Days.
    VarMaxPeriod,
}

impl Threshold {
    pub fn table(self) -> &'static [f64] {
        match self {
            Threshold::Magnitude => &MAGNITUDE_LIMITS,
            Threshold::NearbyDistance => &NEARBY_DISTANCES,
            Threshold::DblMinSeparation => &DBL_MIN_SEPARATIONS,
            Threshold::DblMaxSeparation => &DBL_MAX_SEPARATIONS,
            Threshold::VarMaxPeriod => &VAR_MAX_PERIODS,
        }
    }

    pub fn fallback(self) -> f64 {
        match self {
            Threshold::Magnitude => 100.0,
            Threshold::NearbyDistance => 9999.0,
            Threshold::DblMinSeparation | Threshold::DblMaxSeparation | Threshold::VarMaxPeriod => 0.0,
        }
    }

    pub fn lookup(self, index: i32) -> f64 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.table().get(i))
            .copied()
            .unwrap_or_else(|| self.fallback())
    }
}

/// The active filter mask and every predicate's parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterSettings {
    pub mode: FilterMode,
    pub constellation: i32,
    pub magnitude_limit: f64,
    pub nearby_distance: f64,
    pub object_type: i32,
    pub dbl_min_separation: f64,
    pub dbl_max_separation: f64,
    pub var_max_period: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            mode: FilterMode::empty(),
            constellation: 0,
            magnitude_limit: Threshold::Magnitude.fallback(),
            nearby_distance: Threshold::NearbyDistance.fallback(),
            object_type: 0,
            dbl_min_separation: Threshold::DblMinSeparation.fallback(),
            dbl_max_separation: Threshold::DblMaxSeparation.fallback(),
            var_max_period: Threshold::VarMaxPeriod.fallback(),
        }
    }
}

impl FilterSettings {
    /// Turns every filter off. Parameters are kept.
    pub fn clear(&mut self) {
        debug!("filters cleared");
        self.mode = FilterMode::empty();
    }

    pub fn add(&mut self, mode: FilterMode) {
        self.mode |= mode;
        debug!("filters now {:?}", self.mode);
    }

    /// Enables `mode` and assigns `param` to every flag in it that takes one.
    ///
    /// Constellation and object type use `param` as the code itself; the
    /// other parameterized flags map it through their threshold table.
    pub fn add_with_param(&mut self, mode: FilterMode, param: i32) {
        self.mode |= mode;
        if mode.contains(FilterMode::CONSTELLATION) {
            self.constellation = param;
        }
        if mode.contains(FilterMode::BY_MAGNITUDE) {
            self.magnitude_limit = Threshold::Magnitude.lookup(param);
        }
        if mode.contains(FilterMode::NEARBY) {
            self.nearby_distance = Threshold::NearbyDistance.lookup(param);
        }
        if mode.contains(FilterMode::OBJECT_TYPE) {
            self.object_type = param;
        }
        if mode.contains(FilterMode::DBL_MIN_SEPARATION) {
            self.dbl_min_separation = Threshold::DblMinSeparation.lookup(param);
        }
        if mode.contains(FilterMode::DBL_MAX_SEPARATION) {
            self.dbl_max_separation = Threshold::DblMaxSeparation.lookup(param);
        }
        if mode.contains(FilterMode::VAR_MAX_PERIOD) {
            self.var_max_period = Threshold::VarMaxPeriod.lookup(param);
        }
        debug!("filters now {:?} (param {param})", self.mode);
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_empty()
    }
}

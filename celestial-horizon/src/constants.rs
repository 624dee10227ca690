#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCMIN_PER_DEGREE: f64 = 60.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Sidereal seconds that elapse per solar second.
pub const SIDEREAL_RATE: f64 = 1.00277778;

/// Reference pressure of the refraction formula, in millibars.
pub const STANDARD_PRESSURE_MB: f64 = 1010.0;

/// Reference temperature of the refraction formula, in degrees Celsius.
pub const STANDARD_TEMPERATURE_C: f64 = 10.0;

pub const KELVIN_OFFSET: f64 = 273.0;

//! Alt-azimuth pointing math for a telescope hand controller.
//!
//! Converts between equatorial (RA/Dec) and horizontal (Alt/Azm) frames for an
//! observer at a known latitude, applies an empirical atmospheric refraction
//! correction, and keeps a local sidereal time that is extrapolated from a
//! baseline set by the caller. Everything works in degrees unless a name says
//! otherwise; right ascension in hours appears only where noted.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`engine`] | [`CoordinateEngine`], the stateful observer context |
//! | [`transform`] | Pure frame conversions and great-circle distance |
//! | [`refraction`] | [`Atmosphere`] and the true-altitude refraction formula |
//! | [`sidereal`] | [`SiderealBaseline`], linear LST extrapolation |
//! | [`clock`] | [`Clock`] trait over a wrapping 32-bit millisecond counter |
//! | [`sexagesimal`] | [`Hms`] / [`Dms`] decompositions for display |
//!
//! # Quick Start
//!
//! ```
//! use celestial_horizon::{CoordinateEngine, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut engine = CoordinateEngine::with_clock(clock.clone());
//! engine.set_latitude(37.0).unwrap();
//! engine.set_lst_baseline(10.9).unwrap();
//!
//! let hor = engine.equ_to_hor(200.98, 54.93).unwrap();
//! assert!(hor.alt_deg > 50.0 && hor.alt_deg < 65.0);
//! ```
//!
//! # Features
//!
//! - **`serde`**: derives `Serialize`/`Deserialize` for the coordinate,
//!   latitude and atmosphere value types.

pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod math;
pub mod observer;
pub mod refraction;
pub mod sexagesimal;
pub mod sidereal;
pub mod transform;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::CoordinateEngine;
pub use error::{Error, Result};
pub use observer::Latitude;
pub use refraction::{true_refraction, Atmosphere};
pub use sexagesimal::{Dms, Hms};
pub use sidereal::SiderealBaseline;
pub use transform::{
    angular_distance, equatorial_to_horizontal, horizontal_to_equatorial, EquatorialCoord,
    HorizontalCoord,
};

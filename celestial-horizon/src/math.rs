//! Small angle helpers shared by the transforms.
//!
//! Wrapping goes through `libm::fmod` rather than `%` so negative inputs land
//! in the positive range after a single correction.

/// Wraps degrees into [0, 360).
pub fn wrap_360(degrees: f64) -> f64 {
    let mut w = libm::fmod(degrees, 360.0);
    if w < 0.0 {
        w += 360.0;
    }
    // -1e-17 + 360.0 rounds to 360.0
    if w >= 360.0 {
        w -= 360.0;
    }
    w
}

/// Wraps degrees into (-180, 180].
pub fn wrap_pm_180(degrees: f64) -> f64 {
    let w = wrap_360(degrees);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}

pub fn cot(radians: f64) -> f64 {
    1.0 / libm::tan(radians)
}

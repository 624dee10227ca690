//! The eight packed record layouts and their field decoders.
//!
//! Full-precision layouts store RA in hours and Dec in degrees as `f32`, and
//! magnitudes as hundredths in an `i16`. Compressed layouts trade precision for
//! size:
//!
//! | Field | Encoding | Decode |
//! |-------|----------|--------|
//! | RA | `u16`, 0..65536 over 24h | `raw / 2730.6666666666666` hours |
//! | Dec | `i16`, ±32767 over ±90° | `raw / 364.07777777777777` degrees |
//! | Magnitude | `u8`, 255 = unknown | `raw / 10 − 2.5` |
//!
//! Variable-star periods use a two-range code: 1..=999 are hundredths of a day
//! (0.01–9.99 d), 1000..=32766 are tenths of a day offset by 900
//! (10.0–3186.6 d). Zero and 32767 mean unknown.
//!
//! Bayer/Flamsteed codes: 0–23 are Greek letters α–ω, 24 is "none", and values
//! above 24 are Flamsteed numbers offset by 24.

/// Compressed RA scale, integer units per hour.
#[allow(clippy::excessive_precision)]
pub const RA_DIVISOR: f64 = 2730.6666666666666;

/// Compressed Dec scale, integer units per degree.
#[allow(clippy::excessive_precision)]
pub const DEC_DIVISOR: f64 = 364.07777777777777;

/// Compressed magnitude byte meaning "unknown".
pub const MAGNITUDE_UNKNOWN_BYTE: u8 = 255;

/// Bayer/Flamsteed code meaning "no designation".
pub const BAYER_FLAM_NONE: u8 = 24;

/// Object-type code reported for every stellar layout.
pub const STAR_OBJECT_TYPE: u8 = 2;

pub const PERIOD_UNKNOWN: u16 = 32767;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeneralStarRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub bayer_flam: u8,
    pub obj_id: u32,
    pub mag: i16,
    pub ra: f32,
    pub dec: f32,
}

/// Bright-star layout without a stored id; the id is the 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneralStarCompressedRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub bayer_flam: u8,
    pub mag: u8,
    pub ra: u16,
    pub dec: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleStarRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub bayer_flam: u8,
    pub obj_id: u32,
    /// Separation in tenths of an arcsecond.
    pub sep: u16,
    /// Position angle in whole degrees.
    pub pa: u16,
    pub mag: i16,
    pub mag2: i16,
    pub ra: f32,
    pub dec: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoubleStarCompressedRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub bayer_flam: u8,
    pub obj_id: u16,
    pub sep: u16,
    pub pa: u16,
    pub mag: u8,
    pub mag2: u8,
    pub ra: u16,
    pub dec: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VariableStarRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub bayer_flam: u8,
    pub obj_id: u32,
    /// Packed period code, see module docs.
    pub period: u16,
    /// Magnitude at maximum brightness.
    pub mag: i16,
    /// Magnitude at minimum brightness.
    pub mag2: i16,
    pub ra: f32,
    pub dec: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DsoRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub obj_type: u8,
    pub obj_id: u32,
    pub mag: i16,
    pub ra: f32,
    pub dec: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DsoCompressedRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub obj_type: u8,
    pub obj_id: u16,
    pub mag: u8,
    pub ra: u16,
    pub dec: i16,
}

/// Smallest DSO layout; like the compressed star layout it stores no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DsoVeryCompressedRecord {
    pub has_name: bool,
    pub has_sub_id: bool,
    pub cons: u8,
    pub obj_type: u8,
    pub mag: u8,
    pub ra: u16,
    pub dec: i16,
}

pub fn decode_compressed_ra(raw: u16) -> f64 {
    f64::from(raw) / RA_DIVISOR
}

pub fn decode_compressed_dec(raw: i16) -> f64 {
    f64::from(raw) / DEC_DIVISOR
}

pub fn decode_hundredths(raw: i16) -> f64 {
    f64::from(raw) / 100.0
}

pub fn decode_compressed_magnitude(raw: u8) -> Option<f64> {
    if raw == MAGNITUDE_UNKNOWN_BYTE {
        None
    } else {
        Some(f64::from(raw) / 10.0 - 2.5)
    }
}

/// Period in days, `None` for zero or the unknown code.
pub fn decode_period(raw: u16) -> Option<f64> {
    match raw {
        1..=999 => Some(f64::from(raw) / 100.0),
        1000..=32766 => Some((f64::from(raw) - 900.0) / 10.0),
        _ => None,
    }
}

/// Bayer/Flamsteed code with "none" folded into `None`.
pub fn decode_bayer_flam(raw: u8) -> Option<u8> {
    (raw != BAYER_FLAM_NONE).then_some(raw)
}

/// Fields every layout carries, in decoded units.
pub trait CatalogRecord {
    fn ra_hours(&self) -> f64;
    fn dec_degrees(&self) -> f64;
    /// Primary magnitude; `None` when the layout marks it unknown.
    fn magnitude(&self) -> Option<f64>;
    fn constellation(&self) -> u8;
    fn has_name(&self) -> bool;
    fn has_sub_id(&self) -> bool;
}

macro_rules! common_fields {
    ($record:ty, full) => {
        common_fields!(@impl $record,
            |r: &$record| f64::from(r.ra),
            |r: &$record| f64::from(r.dec),
            |r: &$record| Some(decode_hundredths(r.mag)));
    };
    ($record:ty, compressed) => {
        common_fields!(@impl $record,
            |r: &$record| decode_compressed_ra(r.ra),
            |r: &$record| decode_compressed_dec(r.dec),
            |r: &$record| decode_compressed_magnitude(r.mag));
    };
    (@impl $record:ty, $ra:expr, $dec:expr, $mag:expr) => {
        #[allow(clippy::redundant_closure_call)]
        impl CatalogRecord for $record {
            fn ra_hours(&self) -> f64 {
                ($ra)(self)
            }
            fn dec_degrees(&self) -> f64 {
                ($dec)(self)
            }
            fn magnitude(&self) -> Option<f64> {
                ($mag)(self)
            }
            fn constellation(&self) -> u8 {
                self.cons
            }
            fn has_name(&self) -> bool {
                self.has_name
            }
            fn has_sub_id(&self) -> bool {
                self.has_sub_id
            }
        }
    };
}

common_fields!(GeneralStarRecord, full);
common_fields!(GeneralStarCompressedRecord, compressed);
common_fields!(DoubleStarRecord, full);
common_fields!(DoubleStarCompressedRecord, compressed);
common_fields!(VariableStarRecord, full);
common_fields!(DsoRecord, full);
common_fields!(DsoCompressedRecord, compressed);
common_fields!(DsoVeryCompressedRecord, compressed);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn compressed_magnitude_decoding() {
        assert_eq!(decode_compressed_magnitude(255), None);
        assert_abs_diff_eq!(decode_compressed_magnitude(0).unwrap(), -2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_compressed_magnitude(125).unwrap(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_compressed_magnitude(254).unwrap(), 22.9, epsilon = 1e-12);
    }

    #[test]
    fn period_ranges() {
        assert_abs_diff_eq!(decode_period(500).unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_period(999).unwrap(), 9.99, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_period(1000).unwrap(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_period(1500).unwrap(), 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_period(32766).unwrap(), 3186.6, epsilon = 1e-9);
        assert_eq!(decode_period(32767), None);
        assert_eq!(decode_period(0), None);
        assert_eq!(decode_period(u16::MAX), None);
    }

    #[test]
    fn compressed_coordinates() {
        assert_abs_diff_eq!(decode_compressed_ra(2731), 2731.0 / 2730.6666666666666, epsilon = 1e-12);
        assert_abs_diff_eq!(decode_compressed_ra(2731), 1.0001, epsilon = 1e-4);
        assert_abs_diff_eq!(decode_compressed_dec(364), 0.99979, epsilon = 1e-5);
        assert_abs_diff_eq!(decode_compressed_dec(-32767), -90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(decode_compressed_ra(u16::MAX), 24.0, epsilon = 1e-3);
    }

    #[test]
    fn bayer_flam_none() {
        assert_eq!(decode_bayer_flam(24), None);
        assert_eq!(decode_bayer_flam(0), Some(0));
        assert_eq!(decode_bayer_flam(30), Some(30));
    }

    #[test]
    fn full_record_uses_hundredths() {
        let star = GeneralStarRecord {
            mag: 146,
            ra: 6.752,
            dec: -16.716,
            ..Default::default()
        };
        assert_abs_diff_eq!(star.magnitude().unwrap(), 1.46, epsilon = 1e-12);
        assert_abs_diff_eq!(star.ra_hours(), 6.752, epsilon = 1e-6);
        assert_abs_diff_eq!(star.dec_degrees(), -16.716, epsilon = 1e-5);
    }

    #[test]
    fn compressed_record_unknown_magnitude() {
        let dso = DsoVeryCompressedRecord {
            mag: 255,
            ..Default::default()
        };
        assert_eq!(dso.magnitude(), None);
    }
}

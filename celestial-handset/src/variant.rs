//! Layout dispatch: one closed sum type per level.
//!
//! [`CatalogRecords`] borrows a whole catalog's record array and
//! [`RecordRef`] borrows one record out of it. Both have exactly one variant
//! per [`CatalogType`], so a catalog can never be "selected" with a layout the
//! accessors do not understand.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::records::{
    decode_bayer_flam, decode_compressed_magnitude, decode_hundredths, decode_period,
    CatalogRecord, DoubleStarCompressedRecord, DoubleStarRecord, DsoCompressedRecord, DsoRecord,
    DsoVeryCompressedRecord, GeneralStarCompressedRecord, GeneralStarRecord, VariableStarRecord,
    STAR_OBJECT_TYPE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum CatalogType {
    GeneralStar,
    GeneralStarCompressed,
    DoubleStar,
    DoubleStarCompressed,
    VariableStar,
    Dso,
    DsoCompressed,
    DsoVeryCompressed,
}

impl CatalogType {
    pub const ALL: [CatalogType; 8] = [
        CatalogType::GeneralStar,
        CatalogType::GeneralStarCompressed,
        CatalogType::DoubleStar,
        CatalogType::DoubleStarCompressed,
        CatalogType::VariableStar,
        CatalogType::Dso,
        CatalogType::DsoCompressed,
        CatalogType::DsoVeryCompressed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CatalogType::GeneralStar => "general-star",
            CatalogType::GeneralStarCompressed => "general-star-compressed",
            CatalogType::DoubleStar => "double-star",
            CatalogType::DoubleStarCompressed => "double-star-compressed",
            CatalogType::VariableStar => "variable-star",
            CatalogType::Dso => "dso",
            CatalogType::DsoCompressed => "dso-compressed",
            CatalogType::DsoVeryCompressed => "dso-very-compressed",
        }
    }

    pub fn is_star(self) -> bool {
        !self.is_dso()
    }

    pub fn is_double_star(self) -> bool {
        matches!(
            self,
            CatalogType::DoubleStar | CatalogType::DoubleStarCompressed
        )
    }

    pub fn is_variable_star(self) -> bool {
        self == CatalogType::VariableStar
    }

    pub fn is_dso(self) -> bool {
        matches!(
            self,
            CatalogType::Dso | CatalogType::DsoCompressed | CatalogType::DsoVeryCompressed
        )
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CatalogType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| Error::UnknownCatalogType(s.to_string()))
    }
}

/// A catalog's record array, tagged by layout.
#[derive(Debug, Clone, Copy)]
pub enum CatalogRecords<'a> {
    GeneralStar(&'a [GeneralStarRecord]),
    GeneralStarCompressed(&'a [GeneralStarCompressedRecord]),
    DoubleStar(&'a [DoubleStarRecord]),
    DoubleStarCompressed(&'a [DoubleStarCompressedRecord]),
    VariableStar(&'a [VariableStarRecord]),
    Dso(&'a [DsoRecord]),
    DsoCompressed(&'a [DsoCompressedRecord]),
    DsoVeryCompressed(&'a [DsoVeryCompressedRecord]),
}

/// One record, tagged by layout.
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    GeneralStar(&'a GeneralStarRecord),
    GeneralStarCompressed(&'a GeneralStarCompressedRecord),
    DoubleStar(&'a DoubleStarRecord),
    DoubleStarCompressed(&'a DoubleStarCompressedRecord),
    VariableStar(&'a VariableStarRecord),
    Dso(&'a DsoRecord),
    DsoCompressed(&'a DsoCompressedRecord),
    DsoVeryCompressed(&'a DsoVeryCompressedRecord),
}

/// Runs `$body` with `$r` bound to the inner value of any variant.
macro_rules! each_variant {
    ($enum:ident, $value:expr, $r:ident => $body:expr) => {
        match $value {
            $enum::GeneralStar($r) => $body,
            $enum::GeneralStarCompressed($r) => $body,
            $enum::DoubleStar($r) => $body,
            $enum::DoubleStarCompressed($r) => $body,
            $enum::VariableStar($r) => $body,
            $enum::Dso($r) => $body,
            $enum::DsoCompressed($r) => $body,
            $enum::DsoVeryCompressed($r) => $body,
        }
    };
}

impl<'a> CatalogRecords<'a> {
    pub fn catalog_type(&self) -> CatalogType {
        match self {
            CatalogRecords::GeneralStar(_) => CatalogType::GeneralStar,
            CatalogRecords::GeneralStarCompressed(_) => CatalogType::GeneralStarCompressed,
            CatalogRecords::DoubleStar(_) => CatalogType::DoubleStar,
            CatalogRecords::DoubleStarCompressed(_) => CatalogType::DoubleStarCompressed,
            CatalogRecords::VariableStar(_) => CatalogType::VariableStar,
            CatalogRecords::Dso(_) => CatalogType::Dso,
            CatalogRecords::DsoCompressed(_) => CatalogType::DsoCompressed,
            CatalogRecords::DsoVeryCompressed(_) => CatalogType::DsoVeryCompressed,
        }
    }

    pub fn len(&self) -> usize {
        each_variant!(CatalogRecords, self, r => r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<RecordRef<'a>> {
        let record = match *self {
            CatalogRecords::GeneralStar(r) => RecordRef::GeneralStar(r.get(index)?),
            CatalogRecords::GeneralStarCompressed(r) => {
                RecordRef::GeneralStarCompressed(r.get(index)?)
            }
            CatalogRecords::DoubleStar(r) => RecordRef::DoubleStar(r.get(index)?),
            CatalogRecords::DoubleStarCompressed(r) => {
                RecordRef::DoubleStarCompressed(r.get(index)?)
            }
            CatalogRecords::VariableStar(r) => RecordRef::VariableStar(r.get(index)?),
            CatalogRecords::Dso(r) => RecordRef::Dso(r.get(index)?),
            CatalogRecords::DsoCompressed(r) => RecordRef::DsoCompressed(r.get(index)?),
            CatalogRecords::DsoVeryCompressed(r) => RecordRef::DsoVeryCompressed(r.get(index)?),
        };
        Some(record)
    }

    /// Zero-based rank of `index` among records satisfying `flag`.
    ///
    /// Counts flagged records in `0..=index`, so the caller must already know
    /// that the record at `index` is itself flagged. Linear in `index`.
    pub fn flag_rank(&self, index: usize, flag: impl Fn(&dyn CatalogRecord) -> bool) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let count = each_variant!(CatalogRecords, self, r => {
            r[..=index]
                .iter()
                .filter(|rec| flag(*rec as &dyn CatalogRecord))
                .count()
        });
        count.checked_sub(1)
    }
}

impl<'a> RecordRef<'a> {
    pub fn catalog_type(&self) -> CatalogType {
        match self {
            RecordRef::GeneralStar(_) => CatalogType::GeneralStar,
            RecordRef::GeneralStarCompressed(_) => CatalogType::GeneralStarCompressed,
            RecordRef::DoubleStar(_) => CatalogType::DoubleStar,
            RecordRef::DoubleStarCompressed(_) => CatalogType::DoubleStarCompressed,
            RecordRef::VariableStar(_) => CatalogType::VariableStar,
            RecordRef::Dso(_) => CatalogType::Dso,
            RecordRef::DsoCompressed(_) => CatalogType::DsoCompressed,
            RecordRef::DsoVeryCompressed(_) => CatalogType::DsoVeryCompressed,
        }
    }

    pub fn common(&self) -> &'a dyn CatalogRecord {
        each_variant!(RecordRef, *self, r => r as &'a dyn CatalogRecord)
    }

    pub fn ra_hours(&self) -> f64 {
        self.common().ra_hours()
    }

    pub fn dec_degrees(&self) -> f64 {
        self.common().dec_degrees()
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.common().magnitude()
    }

    /// Secondary magnitude: the companion of a double, the minimum of a variable.
    pub fn magnitude2(&self) -> Option<f64> {
        match *self {
            RecordRef::DoubleStar(r) => Some(decode_hundredths(r.mag2)),
            RecordRef::DoubleStarCompressed(r) => decode_compressed_magnitude(r.mag2),
            RecordRef::VariableStar(r) => Some(decode_hundredths(r.mag2)),
            _ => None,
        }
    }

    pub fn constellation(&self) -> u8 {
        self.common().constellation()
    }

    pub fn object_type(&self) -> u8 {
        match *self {
            RecordRef::Dso(r) => r.obj_type,
            RecordRef::DsoCompressed(r) => r.obj_type,
            RecordRef::DsoVeryCompressed(r) => r.obj_type,
            _ => STAR_OBJECT_TYPE,
        }
    }

    /// Stored identifier; the very-compressed layouts have none.
    pub fn stored_id(&self) -> Option<u32> {
        match *self {
            RecordRef::GeneralStar(r) => Some(r.obj_id),
            RecordRef::DoubleStar(r) => Some(r.obj_id),
            RecordRef::DoubleStarCompressed(r) => Some(u32::from(r.obj_id)),
            RecordRef::VariableStar(r) => Some(r.obj_id),
            RecordRef::Dso(r) => Some(r.obj_id),
            RecordRef::DsoCompressed(r) => Some(u32::from(r.obj_id)),
            RecordRef::GeneralStarCompressed(_) | RecordRef::DsoVeryCompressed(_) => None,
        }
    }

    pub fn bayer_flam(&self) -> Option<u8> {
        let raw = match *self {
            RecordRef::GeneralStar(r) => r.bayer_flam,
            RecordRef::GeneralStarCompressed(r) => r.bayer_flam,
            RecordRef::DoubleStar(r) => r.bayer_flam,
            RecordRef::DoubleStarCompressed(r) => r.bayer_flam,
            RecordRef::VariableStar(r) => r.bayer_flam,
            _ => return None,
        };
        decode_bayer_flam(raw)
    }

    pub fn period_days(&self) -> Option<f64> {
        match *self {
            RecordRef::VariableStar(r) => decode_period(r.period),
            _ => None,
        }
    }

    pub fn position_angle(&self) -> Option<u16> {
        match *self {
            RecordRef::DoubleStar(r) => Some(r.pa),
            RecordRef::DoubleStarCompressed(r) => Some(r.pa),
            _ => None,
        }
    }

    pub fn separation_arcsec(&self) -> Option<f64> {
        match *self {
            RecordRef::DoubleStar(r) => Some(f64::from(r.sep) / 10.0),
            RecordRef::DoubleStarCompressed(r) => Some(f64::from(r.sep) / 10.0),
            _ => None,
        }
    }

    pub fn has_name(&self) -> bool {
        self.common().has_name()
    }

    pub fn has_sub_id(&self) -> bool {
        self.common().has_sub_id()
    }
}

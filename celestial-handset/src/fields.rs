//! Per-field readers for the record under the cursor.
//!
//! Every reader works on the selected catalog's current record. When nothing
//! is selected, or the field does not exist for the selected layout, the
//! reader returns the documented "unknown" value instead:
//!
//! | Reader | Unknown |
//! |--------|---------|
//! | `magnitude`, `magnitude2` | [`MAGNITUDE_UNKNOWN`] (99.9) |
//! | `separation` | [`SEPARATION_UNKNOWN`] (999.9) |
//! | `period`, `position_angle`, `object_type`, `bayer_flam`, ids | -1 |
//! | `constellation` | [`CONSTELLATION_NONE`] (89) |
//! | string readers | `""` |
//!
//! Horizontal-frame readers (`alt`, `azm`, `ha`) return `None` until the
//! observer is initialized.

use celestial_horizon::constants::DEGREES_PER_HOUR;
use celestial_horizon::math::wrap_pm_180;
use celestial_horizon::{angular_distance, Clock, Dms, HorizontalCoord, Hms};

use crate::manager::CatalogManager;
use crate::names::{
    constellation_code_to_str, get_element_from_string, object_type_code_to_str, GREEK_LETTERS,
};
use crate::records::{CatalogRecord, BAYER_FLAM_NONE};
use crate::variant::RecordRef;

pub const MAGNITUDE_UNKNOWN: f64 = 99.9;
pub const SEPARATION_UNKNOWN: f64 = 999.9;
/// Reported as the constellation when no catalog is selected.
pub const CONSTELLATION_NONE: i32 = 89;

impl<'a, C: Clock> CatalogManager<'a, C> {
    fn read<T>(&self, unknown: T, f: impl FnOnce(RecordRef<'a>) -> Option<T>) -> T {
        self.current().and_then(f).unwrap_or(unknown)
    }

    /// RA in hours.
    pub fn rah(&self) -> f64 {
        self.read(0.0, |r| Some(r.ra_hours()))
    }

    /// RA in degrees.
    pub fn ra(&self) -> f64 {
        self.rah() * DEGREES_PER_HOUR
    }

    pub fn ra_hms(&self) -> Hms {
        Hms::from_hours(self.rah())
    }

    /// Dec in degrees.
    pub fn dec(&self) -> f64 {
        self.read(0.0, |r| Some(r.dec_degrees()))
    }

    pub fn dec_dms(&self) -> Dms {
        Dms::from_degrees(self.dec())
    }

    fn horizontal(&self) -> Option<HorizontalCoord> {
        self.current()?;
        self.engine.equ_to_hor(self.ra(), self.dec())
    }

    pub fn alt(&self) -> Option<f64> {
        self.horizontal().map(|h| h.alt_deg)
    }

    pub fn alt_dms(&self) -> Option<Dms> {
        self.alt().map(Dms::from_degrees)
    }

    pub fn azm(&self) -> Option<f64> {
        self.horizontal().map(|h| h.azm_deg)
    }

    pub fn azm_dms(&self) -> Option<Dms> {
        self.azm().map(Dms::from_degrees)
    }

    /// Hour angle in degrees, in (-180, 180].
    pub fn ha(&self) -> Option<f64> {
        self.current()?;
        self.engine
            .is_initialized()
            .then(|| wrap_pm_180(self.engine.lst_degrees() - self.ra()))
    }

    /// Great-circle distance in degrees from the current record to a point.
    pub fn dist_from_equ(&self, ra_deg: f64, dec_deg: f64) -> f64 {
        angular_distance(self.ra(), self.dec(), ra_deg, dec_deg)
    }

    /// Refraction-corrected place for `ra_hours`/`dec_deg`; see
    /// [`celestial_horizon::CoordinateEngine::topocentric_to_observed_place`].
    pub fn topocentric_to_observed_place(&self, ra_hours: f64, dec_deg: f64) -> (f64, f64) {
        self.engine.topocentric_to_observed_place(ra_hours, dec_deg)
    }

    pub fn magnitude(&self) -> f64 {
        self.read(MAGNITUDE_UNKNOWN, |r| r.magnitude())
    }

    /// Companion magnitude for doubles, minimum brightness for variables.
    pub fn magnitude2(&self) -> f64 {
        self.read(MAGNITUDE_UNKNOWN, |r| r.magnitude2())
    }

    /// Variable-star period in days.
    pub fn period(&self) -> f64 {
        self.read(-1.0, |r| r.period_days())
    }

    /// Double-star position angle in degrees.
    pub fn position_angle(&self) -> i32 {
        self.read(-1, |r| r.position_angle().map(i32::from))
    }

    /// Double-star separation in arcseconds.
    pub fn separation(&self) -> f64 {
        self.read(SEPARATION_UNKNOWN, |r| r.separation_arcsec())
    }

    pub fn constellation(&self) -> i32 {
        self.read(CONSTELLATION_NONE, |r| Some(i32::from(r.constellation())))
    }

    pub fn constellation_str(&self) -> &'static str {
        constellation_code_to_str(self.constellation())
    }

    pub fn object_type(&self) -> i32 {
        self.read(-1, |r| Some(i32::from(r.object_type())))
    }

    pub fn object_type_str(&self) -> &'static str {
        object_type_code_to_str(self.object_type())
    }

    /// Rank of the current record among records with `flag` set.
    fn flag_rank(&self, flag: fn(&dyn CatalogRecord) -> bool) -> Option<usize> {
        let desc = self.descriptor()?;
        let record = desc.records.get(desc.index)?;
        if !flag(record.common()) {
            return None;
        }
        desc.records.flag_rank(desc.index, flag)
    }

    /// Position in the name list, or -1 when the record has no name.
    pub fn object_name(&self) -> i64 {
        self.flag_rank(|r| r.has_name()).map_or(-1, |rank| rank as i64)
    }

    pub fn object_name_str(&self) -> &'a str {
        match (self.descriptor(), self.flag_rank(|r| r.has_name())) {
            (Some(desc), Some(rank)) => get_element_from_string(desc.names, rank),
            _ => "",
        }
    }

    /// Position in the sub-id list, or -1 when the record has no sub-id.
    pub fn sub_id(&self) -> i64 {
        self.flag_rank(|r| r.has_sub_id()).map_or(-1, |rank| rank as i64)
    }

    pub fn sub_id_str(&self) -> &'a str {
        match (self.descriptor(), self.flag_rank(|r| r.has_sub_id())) {
            (Some(desc), Some(rank)) => get_element_from_string(desc.sub_ids, rank),
            _ => "",
        }
    }

    /// Catalog number of the current record.
    ///
    /// Layouts without a stored id are numbered by position, starting at 1.
    pub fn primary_id(&self) -> i64 {
        let Some(desc) = self.descriptor() else {
            return -1;
        };
        match desc.records.get(desc.index) {
            Some(record) => record
                .stored_id()
                .map_or(desc.index as i64 + 1, i64::from),
            None => -1,
        }
    }

    /// Bayer letter (0..=23) or Flamsteed number offset by 24; -1 for none.
    pub fn bayer_flam(&self) -> i32 {
        self.read(-1, |r| r.bayer_flam().map(i32::from))
    }

    /// "Alp".."Ome" for Bayer letters, the number for Flamsteed stars.
    pub fn bayer_flam_str(&self) -> String {
        let code = self.bayer_flam();
        let none = i32::from(BAYER_FLAM_NONE);
        match usize::try_from(code) {
            Ok(i) if i < GREEK_LETTERS.len() => GREEK_LETTERS[i].to_string(),
            _ if code > none => (code - none).to_string(),
            _ => String::new(),
        }
    }
}

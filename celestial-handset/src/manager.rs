//! Catalog selection, filtered navigation and filter evaluation.
//!
//! [`CatalogManager`] owns everything the handset keeps between key presses:
//! the registry (with each catalog's cursor), which catalog is selected, the
//! filter settings and the observer context. Field accessors live in
//! [`crate::fields`].

use celestial_horizon::constants::DEGREES_PER_HOUR;
use celestial_horizon::{angular_distance, Clock, CoordinateEngine, SystemClock};
use log::{debug, warn};

use crate::descriptor::CatalogDescriptor;
use crate::error::Result;
use crate::fields::MAGNITUDE_UNKNOWN;
use crate::filter::{FilterMode, FilterSettings};
use crate::registry::CatalogRegistry;
use crate::variant::{CatalogType, RecordRef};

/// Minimum altitude for all-sky alignment stars, degrees.
pub const ALIGN_MIN_ALTITUDE: f64 = 10.0;
/// Alignment stars closer to a pole than this declination are skipped.
pub const ALIGN_MAX_ABS_DEC: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

pub struct CatalogManager<'a, C: Clock = SystemClock> {
    pub(crate) registry: CatalogRegistry<'a>,
    pub(crate) selected: Option<usize>,
    pub(crate) filters: FilterSettings,
    pub(crate) engine: CoordinateEngine<C>,
}

impl<'a> CatalogManager<'a, SystemClock> {
    pub fn new(registry: CatalogRegistry<'a>) -> Self {
        Self::with_engine(registry, CoordinateEngine::new())
    }
}

impl<'a, C: Clock> CatalogManager<'a, C> {
    pub fn with_engine(registry: CatalogRegistry<'a>, engine: CoordinateEngine<C>) -> Self {
        Self {
            registry,
            selected: None,
            filters: FilterSettings::default(),
            engine,
        }
    }

    pub fn registry(&self) -> &CatalogRegistry<'a> {
        &self.registry
    }

    pub fn engine(&self) -> &CoordinateEngine<C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CoordinateEngine<C> {
        &mut self.engine
    }

    /// Sets latitude (degrees) and the sidereal-time baseline (hours) in one go.
    pub fn set_observer(&mut self, latitude_deg: f64, lst_hours: f64) -> Result<()> {
        self.engine.set_latitude(latitude_deg)?;
        self.engine.set_lst_baseline(lst_hours)?;
        Ok(())
    }

    pub fn num_catalogs(&self) -> usize {
        self.registry.num_catalogs()
    }

    pub fn has_dbl_star_catalog(&self) -> bool {
        self.registry.has_dbl_star_catalog()
    }

    pub fn has_var_star_catalog(&self) -> bool {
        self.registry.has_var_star_catalog()
    }

    /// Selects catalog `n`. Anything outside `0..num_catalogs()` clears the
    /// selection instead.
    pub fn select(&mut self, n: i32) {
        let count = self.num_catalogs();
        self.selected = usize::try_from(n).ok().filter(|&i| i < count);
        match self.descriptor() {
            Some(desc) => debug!(
                "selected catalog {n} \"{}\" ({}, {} records)",
                desc.title,
                desc.catalog_type(),
                desc.record_count()
            ),
            None if n < 0 => debug!("catalog selection cleared"),
            None => warn!("catalog {n} is not available ({count} catalogs), selection cleared"),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn descriptor(&self) -> Option<&CatalogDescriptor<'a>> {
        self.registry.get(self.selected?)
    }

    /// The record under the cursor of the selected catalog.
    pub(crate) fn current(&self) -> Option<RecordRef<'a>> {
        let desc = self.descriptor()?;
        desc.records.get(desc.index)
    }

    pub fn catalog_type(&self) -> Option<CatalogType> {
        self.descriptor().map(CatalogDescriptor::catalog_type)
    }

    pub fn catalog_title(&self) -> &'a str {
        self.descriptor().map_or("", |d| d.title)
    }

    pub fn catalog_prefix(&self) -> &'a str {
        self.descriptor().map_or("", |d| d.prefix)
    }

    pub fn epoch(&self) -> i32 {
        self.descriptor().map_or(-1, |d| d.epoch)
    }

    pub fn is_star_catalog(&self) -> bool {
        self.catalog_type().is_some_and(CatalogType::is_star)
    }

    pub fn is_dbl_star_catalog(&self) -> bool {
        self.catalog_type().is_some_and(CatalogType::is_double_star)
    }

    pub fn is_var_star_catalog(&self) -> bool {
        self.catalog_type().is_some_and(CatalogType::is_variable_star)
    }

    pub fn is_dso_catalog(&self) -> bool {
        self.catalog_type().is_some_and(CatalogType::is_dso)
    }

    pub fn index(&self) -> Option<usize> {
        self.descriptor().map(|d| d.index)
    }

    pub fn max_index(&self) -> Option<usize> {
        self.descriptor().and_then(CatalogDescriptor::max_index)
    }

    /// Moves to the next unfiltered record, wrapping at the end.
    ///
    /// Returns false when nothing is selected or when every record is
    /// filtered out. At most one full lap is taken.
    pub fn inc_index(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    /// Moves to the previous unfiltered record, wrapping at the start.
    pub fn dec_index(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    fn step(&mut self, direction: Direction) -> bool {
        let Some(n) = self.selected else {
            return false;
        };
        let count = self.registry.get(n).map_or(0, CatalogDescriptor::record_count);
        if count == 0 {
            return false;
        }

        let mut budget = count;
        loop {
            budget -= 1;
            if let Some(desc) = self.registry.get_mut(n) {
                desc.index = match direction {
                    Direction::Forward if desc.index + 1 >= count => 0,
                    Direction::Forward => desc.index + 1,
                    Direction::Backward if desc.index == 0 || desc.index >= count => count - 1,
                    Direction::Backward => desc.index - 1,
                };
            }
            if budget == 0 || !self.is_filtered() {
                break;
            }
        }

        if self.is_filtered() {
            debug!("no unfiltered record reachable {direction:?} in catalog {n}");
            false
        } else {
            true
        }
    }

    /// Jumps to record `i` (reduced modulo the record count) and realigns.
    ///
    /// The cursor steps back once and then forward once, both filter-aware,
    /// so a filtered target resolves to the next unfiltered record after it.
    pub fn set_index(&mut self, i: usize) -> bool {
        let Some(n) = self.selected else {
            return false;
        };
        let Some(desc) = self.registry.get_mut(n) else {
            return false;
        };
        let count = desc.record_count();
        if count == 0 {
            return false;
        }
        desc.index = i % count;
        self.dec_index();
        let found = self.inc_index();
        debug!("set_index({i}) landed on {:?}", self.index());
        found
    }

    pub fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    /// Replaces the whole filter state, e.g. from a saved snapshot.
    pub fn set_filters(&mut self, filters: FilterSettings) {
        debug!("filters restored: {:?}", filters.mode);
        self.filters = filters;
    }

    pub fn filters_clear(&mut self) {
        self.filters.clear();
    }

    pub fn filter_add(&mut self, mode: FilterMode) {
        self.filters.add(mode);
    }

    pub fn filter_add_with_param(&mut self, mode: FilterMode, param: i32) {
        self.filters.add_with_param(mode, param);
    }

    /// True when the current record fails any active filter.
    ///
    /// Filters are inert until the observer is initialized, and nothing is
    /// filtered while no catalog is selected.
    pub fn is_filtered(&self) -> bool {
        if !self.engine.is_initialized() || self.filters.is_empty() {
            return false;
        }
        let Some(record) = self.current() else {
            return false;
        };
        let f = &self.filters;
        let mode = f.mode;
        let kind = record.catalog_type();
        let ra_deg = record.ra_hours() * DEGREES_PER_HOUR;
        let dec_deg = record.dec_degrees();

        if mode.intersects(FilterMode::ABOVE_HORIZON | FilterMode::ALIGN_ALL_SKY) {
            if let Some(hor) = self.engine.equ_to_hor(ra_deg, dec_deg) {
                if mode.contains(FilterMode::ABOVE_HORIZON) && hor.alt_deg < 0.0 {
                    return true;
                }
                if mode.contains(FilterMode::ALIGN_ALL_SKY)
                    && (hor.alt_deg < ALIGN_MIN_ALTITUDE || dec_deg.abs() > ALIGN_MAX_ABS_DEC)
                {
                    return true;
                }
            }
        }
        if mode.contains(FilterMode::CONSTELLATION)
            && i32::from(record.constellation()) != f.constellation
        {
            return true;
        }
        if kind.is_dso()
            && mode.contains(FilterMode::OBJECT_TYPE)
            && i32::from(record.object_type()) != f.object_type
        {
            return true;
        }
        if mode.contains(FilterMode::BY_MAGNITUDE)
            && record.magnitude().unwrap_or(MAGNITUDE_UNKNOWN) >= f.magnitude_limit
        {
            return true;
        }
        if mode.contains(FilterMode::NEARBY) {
            let tele = self.engine.last_telescope_equatorial();
            if angular_distance(ra_deg, dec_deg, tele.ra_deg, tele.dec_deg) >= f.nearby_distance {
                return true;
            }
        }
        if kind.is_double_star() {
            if let Some(sep) = record.separation_arcsec() {
                if mode.contains(FilterMode::DBL_MAX_SEPARATION) && sep > f.dbl_max_separation {
                    return true;
                }
                if mode.contains(FilterMode::DBL_MIN_SEPARATION) && sep < f.dbl_min_separation {
                    return true;
                }
            }
        }
        if kind.is_variable_star() && mode.contains(FilterMode::VAR_MAX_PERIOD) {
            if let Some(period) = record.period_days() {
                if period > f.var_max_period {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DoubleStarRecord, DsoCompressedRecord, GeneralStarRecord, VariableStarRecord};
    use crate::variant::CatalogRecords;
    use celestial_horizon::ManualClock;

    fn star(ra: f32, dec: f32, mag: i16, cons: u8) -> GeneralStarRecord {
        GeneralStarRecord {
            cons,
            bayer_flam: 24,
            mag,
            ra,
            dec,
            ..Default::default()
        }
    }

    fn manager<'a>(catalogs: Vec<CatalogDescriptor<'a>>) -> CatalogManager<'a, ManualClock> {
        let registry = CatalogRegistry::new(catalogs).unwrap();
        CatalogManager::with_engine(registry, CoordinateEngine::with_clock(ManualClock::new()))
    }

    #[test]
    fn select_out_of_range_clears_selection() {
        let stars = [star(1.0, 0.0, 100, 0); 3];
        let mut mgr = manager(vec![CatalogDescriptor::new(
            "Stars",
            "Star ",
            CatalogRecords::GeneralStar(&stars),
        )]);
        mgr.select(0);
        assert_eq!(mgr.catalog_type(), Some(CatalogType::GeneralStar));
        assert_eq!(mgr.catalog_prefix(), "Star ");
        assert_eq!(mgr.epoch(), 2000);
        mgr.select(1);
        assert_eq!(mgr.selected(), None);
        assert_eq!(mgr.catalog_title(), "");
        assert_eq!(mgr.epoch(), -1);
        assert!(!mgr.is_star_catalog());
    }

    #[test]
    fn navigation_without_selection_is_refused() {
        let mut mgr = manager(Vec::new());
        assert!(!mgr.inc_index());
        assert!(!mgr.dec_index());
        assert!(!mgr.set_index(3));
        assert_eq!(mgr.index(), None);
    }

    #[test]
    fn filters_are_inert_until_initialized() {
        let stars = [star(1.0, 0.0, 1200, 0); 2];
        let mut mgr = manager(vec![CatalogDescriptor::new("S", "", CatalogRecords::GeneralStar(&stars))]);
        mgr.select(0);
        mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 0);
        assert!(!mgr.is_filtered());
        mgr.set_observer(40.0, 1.0).unwrap();
        assert!(mgr.is_filtered());
    }

    #[test]
    fn magnitude_and_constellation_filters() {
        let stars = [
            star(1.0, 10.0, 1200, 5),
            star(2.0, 10.0, 450, 5),
            star(3.0, 10.0, 300, 7),
        ];
        let mut mgr = manager(vec![CatalogDescriptor::new("S", "", CatalogRecords::GeneralStar(&stars))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.select(0);
        mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 0);
        mgr.filter_add_with_param(FilterMode::CONSTELLATION, 5);
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
    }

    #[test]
    fn object_type_filter_ignores_star_catalogs() {
        let stars = [star(1.0, 10.0, 100, 0); 2];
        let dsos = [
            DsoCompressedRecord { obj_type: 8, ..Default::default() },
            DsoCompressedRecord { obj_type: 0, ..Default::default() },
        ];
        let mut mgr = manager(vec![
            CatalogDescriptor::new("S", "", CatalogRecords::GeneralStar(&stars)),
            CatalogDescriptor::new("D", "", CatalogRecords::DsoCompressed(&dsos)),
        ]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.filter_add_with_param(FilterMode::OBJECT_TYPE, 0);
        mgr.select(0);
        assert!(!mgr.is_filtered());
        mgr.select(1);
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
    }

    #[test]
    fn double_star_separation_bounds() {
        let doubles = [
            DoubleStarRecord { sep: 3, ..Default::default() },
            DoubleStarRecord { sep: 25, ..Default::default() },
            DoubleStarRecord { sep: 300, ..Default::default() },
        ];
        let mut mgr = manager(vec![CatalogDescriptor::new("D", "", CatalogRecords::DoubleStar(&doubles))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.select(0);
        // 1.0" .. 10" keeps only the middle pair.
        mgr.filter_add_with_param(FilterMode::DBL_MIN_SEPARATION, 2);
        mgr.filter_add_with_param(FilterMode::DBL_MAX_SEPARATION, 6);
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
    }

    #[test]
    fn variable_star_period_ceiling() {
        let vars = [
            VariableStarRecord { period: 1500, ..Default::default() },
            VariableStarRecord { period: 32767, ..Default::default() },
            VariableStarRecord { period: 150, ..Default::default() },
        ];
        let mut mgr = manager(vec![CatalogDescriptor::new("V", "", CatalogRecords::VariableStar(&vars))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.select(0);
        mgr.filter_add_with_param(FilterMode::VAR_MAX_PERIOD, 2);
        // 60 d is filtered, unknown period is kept, 1.5 d is kept.
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(2));
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
    }

    #[test]
    fn nearby_uses_last_telescope_position() {
        let stars = [star(0.0, 0.0, 100, 0), star(6.0, 0.0, 100, 0)];
        let mut mgr = manager(vec![CatalogDescriptor::new("S", "", CatalogRecords::GeneralStar(&stars))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.engine_mut().set_last_telescope_equatorial(92.0, 1.0);
        mgr.select(0);
        mgr.filter_add_with_param(FilterMode::NEARBY, 1);
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(1));
    }

    #[test]
    fn horizon_and_alignment_filters() {
        // From latitude 40 with LST 0h: RA 0h Dec 60 transits high, RA 12h Dec
        // -60 is well below the horizon and Dec 88 is too close to the pole.
        let stars = [star(0.0, 60.0, 100, 0), star(12.0, -60.0, 100, 0), star(0.0, 88.0, 100, 0)];
        let mut mgr = manager(vec![CatalogDescriptor::new("S", "", CatalogRecords::GeneralStar(&stars))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.select(0);
        mgr.filter_add(FilterMode::ABOVE_HORIZON);
        assert!(!mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(2));

        mgr.filters_clear();
        mgr.filter_add(FilterMode::ALIGN_ALL_SKY);
        assert!(mgr.is_filtered());
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some(0));
    }

    #[test]
    fn unknown_magnitude_is_filtered_below_open_limit() {
        let dsos = [DsoCompressedRecord { mag: 255, ..Default::default() }; 1];
        let mut mgr = manager(vec![CatalogDescriptor::new("D", "", CatalogRecords::DsoCompressed(&dsos))]);
        mgr.set_observer(40.0, 0.0).unwrap();
        mgr.select(0);
        mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 6);
        assert!(mgr.is_filtered());
        mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 99);
        assert!(!mgr.is_filtered());
    }

    #[test]
    fn filter_snapshot_restores() {
        let mut mgr = manager(Vec::new());
        mgr.filter_add_with_param(FilterMode::NEARBY, 0);
        let saved = *mgr.filters();
        mgr.filters_clear();
        assert!(mgr.filters().is_empty());
        mgr.set_filters(saved);
        assert_eq!(mgr.filters().mode, FilterMode::NEARBY);
        assert_eq!(mgr.filters().nearby_distance, 1.0);
    }
}

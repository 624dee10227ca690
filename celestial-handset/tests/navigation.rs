use celestial_handset::records::{DsoCompressedRecord, GeneralStarCompressedRecord};
use celestial_handset::{
    CatalogDescriptor, CatalogManager, CatalogRecords, CatalogRegistry, CatalogType, FilterMode,
};
use celestial_horizon::{CoordinateEngine, ManualClock};

fn manager(catalogs: Vec<CatalogDescriptor<'_>>) -> CatalogManager<'_, ManualClock> {
    let registry = CatalogRegistry::new(catalogs).unwrap();
    CatalogManager::with_engine(registry, CoordinateEngine::with_clock(ManualClock::new()))
}

/// Records with magnitudes 0.0, 1.0, 2.0, ... (byte = 25 + 10 * i).
fn graded_stars(n: u8) -> Vec<GeneralStarCompressedRecord> {
    (0..n)
        .map(|i| GeneralStarCompressedRecord {
            bayer_flam: 24,
            mag: 25 + 10 * i,
            ra: u16::from(i) * 2000,
            dec: 3640,
            ..Default::default()
        })
        .collect()
}

#[test]
fn unfiltered_inc_dec_round_trip_from_every_index() {
    let stars = graded_stars(7);
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "Star ",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.select(0);
    let count = stars.len();

    for start in 0..count {
        mgr.set_index(start);
        assert_eq!(mgr.index(), Some(start));
        assert!(mgr.inc_index());
        assert_eq!(mgr.index(), Some((start + 1) % count));
        assert!(mgr.dec_index());
        assert_eq!(mgr.index(), Some(start));
    }
}

#[test]
fn wraps_at_both_ends() {
    let stars = graded_stars(4);
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.select(0);
    assert_eq!(mgr.max_index(), Some(3));
    assert!(mgr.dec_index());
    assert_eq!(mgr.index(), Some(3));
    assert!(mgr.inc_index());
    assert_eq!(mgr.index(), Some(0));
}

#[test]
fn fully_filtered_catalog_gives_up_in_range() {
    let stars = graded_stars(5);
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.set_observer(45.0, 3.0).unwrap();
    mgr.select(0);
    // Constellation 87 matches no record.
    mgr.filter_add_with_param(FilterMode::CONSTELLATION, 87);
    assert!(mgr.is_filtered());

    assert!(!mgr.inc_index());
    assert!(mgr.index().unwrap() <= 4);
    assert!(!mgr.dec_index());
    assert!(mgr.index().unwrap() <= 4);
    assert!(!mgr.set_index(2));
    assert!(mgr.index().unwrap() <= 4);
}

#[test]
fn single_record_catalog_navigates_in_place() {
    let stars = graded_stars(1);
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "One",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.select(0);
    assert!(mgr.inc_index());
    assert_eq!(mgr.index(), Some(0));
    assert!(mgr.dec_index());
    assert_eq!(mgr.index(), Some(0));
}

#[test]
fn set_index_lands_on_next_unfiltered_record() {
    let mut stars = graded_stars(7);
    stars[3].mag = 200;
    stars[4].mag = 200;
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.set_observer(10.0, 0.0).unwrap();
    mgr.select(0);
    // Limit 10: records 3 and 4 (magnitude 17.5) are hidden.
    mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 0);

    assert!(mgr.set_index(3));
    assert_eq!(mgr.index(), Some(5));
    assert!(mgr.set_index(4));
    assert_eq!(mgr.index(), Some(5));
    assert!(mgr.set_index(2));
    assert_eq!(mgr.index(), Some(2));
    // Indices past the end wrap around.
    assert!(mgr.set_index(8));
    assert_eq!(mgr.index(), Some(1));
}

#[test]
fn filtered_navigation_skips_hidden_records() {
    let mut stars = graded_stars(6);
    stars[1].mag = 255;
    stars[2].mag = 255;
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.set_observer(10.0, 0.0).unwrap();
    mgr.select(0);
    mgr.filter_add_with_param(FilterMode::BY_MAGNITUDE, 3);

    assert!(mgr.inc_index());
    assert_eq!(mgr.index(), Some(3));
    assert!(mgr.dec_index());
    assert_eq!(mgr.index(), Some(0));
    assert!(mgr.dec_index());
    assert_eq!(mgr.index(), Some(5));
}

#[test]
fn cursor_is_kept_per_catalog() {
    let stars = graded_stars(5);
    let dsos = [DsoCompressedRecord::default(); 3];
    let mut mgr = manager(vec![
        CatalogDescriptor::new("Stars", "", CatalogRecords::GeneralStarCompressed(&stars)),
        CatalogDescriptor::new("Messier", "M", CatalogRecords::DsoCompressed(&dsos)),
    ]);
    mgr.select(0);
    mgr.set_index(3);
    mgr.select(1);
    assert_eq!(mgr.catalog_type(), Some(CatalogType::DsoCompressed));
    assert_eq!(mgr.index(), Some(0));
    mgr.inc_index();
    mgr.select(0);
    assert_eq!(mgr.index(), Some(3));
    mgr.select(1);
    assert_eq!(mgr.index(), Some(1));
}

#[test]
fn filters_wait_for_observer() {
    let stars = graded_stars(3);
    let mut mgr = manager(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&stars),
    )]);
    mgr.select(0);
    mgr.filter_add(FilterMode::ABOVE_HORIZON);
    mgr.filter_add_with_param(FilterMode::CONSTELLATION, 87);
    assert!(!mgr.is_filtered());
    assert!(mgr.inc_index());
    assert_eq!(mgr.index(), Some(1));
}

#[test]
fn above_horizon_tracks_the_clock() {
    // One record on the celestial equator at RA 6h, seen from the equator.
    let star = [GeneralStarCompressedRecord {
        bayer_flam: 24,
        mag: 50,
        ra: 16384,
        dec: 0,
        ..Default::default()
    }];
    let clock = ManualClock::new();
    let registry = CatalogRegistry::new(vec![CatalogDescriptor::new(
        "Stars",
        "",
        CatalogRecords::GeneralStarCompressed(&star),
    )])
    .unwrap();
    let mut mgr = CatalogManager::with_engine(registry, CoordinateEngine::with_clock(clock.clone()));
    mgr.set_observer(0.0, 6.0).unwrap();
    mgr.select(0);
    mgr.filter_add(FilterMode::ABOVE_HORIZON);
    assert!(!mgr.is_filtered());

    // Nine sidereal hours later the star has set.
    clock.advance(9 * 3_600_000);
    assert!(mgr.is_filtered());
    assert!(!mgr.inc_index());
}

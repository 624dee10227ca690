//! Object catalogs for a telescope hand controller.
//!
//! A handset ships a handful of catalogs (bright stars, Messier, NGC, double
//! and variable stars, ...), each stored in one of eight packed record layouts
//! to fit in flash. This crate selects a catalog, walks its records with
//! optional filters, and decodes the fields of the record under the cursor.
//! Pointing math comes from [`celestial_horizon`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`records`] | The eight record layouts and their field decoders |
//! | [`variant`] | [`CatalogType`], [`CatalogRecords`] and [`RecordRef`] dispatch |
//! | [`descriptor`] | [`CatalogDescriptor`]: title, prefix, records, name blobs, cursor |
//! | [`registry`] | [`CatalogRegistry`], the ordered catalog list |
//! | [`filter`] | [`FilterMode`] mask and [`FilterSettings`] thresholds |
//! | [`manager`] | [`CatalogManager`]: selection and filtered navigation |
//! | [`fields`] | Field readers on [`CatalogManager`] |
//! | [`names`] | Constellation, object-type and Bayer display strings |
//!
//! # Quick Start
//!
//! ```
//! use celestial_handset::records::GeneralStarRecord;
//! use celestial_handset::{
//!     CatalogDescriptor, CatalogManager, CatalogRecords, CatalogRegistry, FilterMode,
//! };
//! use celestial_horizon::{CoordinateEngine, ManualClock};
//!
//! let stars = [
//!     GeneralStarRecord { has_name: true, cons: 51, bayer_flam: 0, obj_id: 1, mag: 3, ra: 18.6156, dec: 38.7837, ..Default::default() },
//!     GeneralStarRecord { has_name: true, cons: 30, bayer_flam: 0, obj_id: 2, mag: 125, ra: 20.6905, dec: 45.2803, ..Default::default() },
//! ];
//! let registry = CatalogRegistry::new(vec![
//!     CatalogDescriptor::new("Stars", "Star ", CatalogRecords::GeneralStar(&stars))
//!         .with_names("Vega;Deneb"),
//! ])?;
//!
//! let mut handset =
//!     CatalogManager::with_engine(registry, CoordinateEngine::with_clock(ManualClock::new()));
//! handset.set_observer(45.0, 19.0)?;
//! handset.select(0);
//! handset.filter_add_with_param(FilterMode::BY_MAGNITUDE, 0);
//!
//! assert!(handset.inc_index());
//! assert_eq!(handset.object_name_str(), "Deneb");
//! assert_eq!(handset.constellation_str(), "Cygnus");
//! assert_eq!(handset.bayer_flam_str(), "Alp");
//! # Ok::<(), celestial_handset::Error>(())
//! ```
//!
//! # Features
//!
//! - **`serde`**: derives `Serialize`/`Deserialize` for [`CatalogType`],
//!   [`FilterMode`] and [`FilterSettings`], and enables the same feature in
//!   `celestial-horizon`.

pub mod descriptor;
pub mod error;
pub mod fields;
pub mod filter;
pub mod manager;
pub mod names;
pub mod records;
pub mod registry;
pub mod variant;

pub use descriptor::CatalogDescriptor;
pub use error::{Error, Result};
pub use fields::{CONSTELLATION_NONE, MAGNITUDE_UNKNOWN, SEPARATION_UNKNOWN};
pub use filter::{FilterMode, FilterSettings, Threshold};
pub use manager::CatalogManager;
pub use names::{constellation_code_to_str, get_element_from_string, object_type_code_to_str};
pub use records::CatalogRecord;
pub use registry::{CatalogRegistry, MAX_CATALOGS};
pub use variant::{CatalogRecords, CatalogType, RecordRef};

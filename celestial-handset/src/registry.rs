//! The ordered list of catalogs available to the handset.
//!
//! The list ends at the first catalog with no records, or at the end of the
//! backing vector, whichever comes first. Entries past that point are never
//! enumerated or selectable.

use crate::descriptor::CatalogDescriptor;
use crate::error::{Error, Result};
use crate::variant::CatalogType;

pub const MAX_CATALOGS: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry<'a> {
    catalogs: Vec<CatalogDescriptor<'a>>,
}

impl<'a> CatalogRegistry<'a> {
    pub fn new(catalogs: Vec<CatalogDescriptor<'a>>) -> Result<Self> {
        if catalogs.len() > MAX_CATALOGS {
            return Err(Error::TooManyCatalogs {
                count: catalogs.len(),
                max: MAX_CATALOGS,
            });
        }
        Ok(Self { catalogs })
    }

    pub fn num_catalogs(&self) -> usize {
        self.catalogs
            .iter()
            .position(|c| c.record_count() == 0)
            .unwrap_or(self.catalogs.len())
    }

    pub fn get(&self, n: usize) -> Option<&CatalogDescriptor<'a>> {
        self.catalogs[..self.num_catalogs()].get(n)
    }

    pub fn get_mut(&mut self, n: usize) -> Option<&mut CatalogDescriptor<'a>> {
        let end = self.num_catalogs();
        self.catalogs[..end].get_mut(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogDescriptor<'a>> {
        self.catalogs[..self.num_catalogs()].iter()
    }

    fn has_type(&self, wanted: impl Fn(CatalogType) -> bool) -> bool {
        self.iter().any(|c| wanted(c.catalog_type()))
    }

    pub fn has_dbl_star_catalog(&self) -> bool {
        self.has_type(CatalogType::is_double_star)
    }

    pub fn has_var_star_catalog(&self) -> bool {
        self.has_type(CatalogType::is_variable_star)
    }
}

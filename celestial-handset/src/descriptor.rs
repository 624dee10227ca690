use crate::variant::{CatalogRecords, CatalogType};

/// One catalog as supplied by the data tables, plus its navigation cursor.
///
/// Everything except `index` is fixed for the life of the registry.
#[derive(Debug, Clone)]
pub struct CatalogDescriptor<'a> {
    pub title: &'a str,
    pub prefix: &'a str,
    pub records: CatalogRecords<'a>,
    /// `;`-delimited names, one per record with `has_name` set.
    pub names: &'a str,
    /// `;`-delimited sub-ids, one per record with `has_sub_id` set.
    pub sub_ids: &'a str,
    pub epoch: i32,
    pub index: usize,
}

impl<'a> CatalogDescriptor<'a> {
    pub fn new(title: &'a str, prefix: &'a str, records: CatalogRecords<'a>) -> Self {
        Self {
            title,
            prefix,
            records,
            names: "",
            sub_ids: "",
            epoch: 2000,
            index: 0,
        }
    }

    pub fn with_names(mut self, names: &'a str) -> Self {
        self.names = names;
        self
    }

    pub fn with_sub_ids(mut self, sub_ids: &'a str) -> Self {
        self.sub_ids = sub_ids;
        self
    }

    pub fn with_epoch(mut self, epoch: i32) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn catalog_type(&self) -> CatalogType {
        self.records.catalog_type()
    }

    /// Highest valid record index, `None` for an empty catalog.
    pub fn max_index(&self) -> Option<usize> {
        self.record_count().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DsoRecord;

    #[test]
    fn builder_sets_blobs_and_epoch() {
        let records = [DsoRecord::default(); 3];
        let desc = CatalogDescriptor::new("Messier", "M", CatalogRecords::Dso(&records))
            .with_names("Crab Nebula")
            .with_sub_ids("NGC 1952")
            .with_epoch(1950);
        assert_eq!(desc.record_count(), 3);
        assert_eq!(desc.max_index(), Some(2));
        assert_eq!(desc.catalog_type(), CatalogType::Dso);
        assert_eq!(desc.names, "Crab Nebula");
        assert_eq!(desc.sub_ids, "NGC 1952");
        assert_eq!(desc.epoch, 1950);
        assert_eq!(desc.index, 0);
    }

    #[test]
    fn empty_catalog_has_no_max_index() {
        let desc = CatalogDescriptor::new("", "", CatalogRecords::Dso(&[]));
        assert_eq!(desc.max_index(), None);
    }
}

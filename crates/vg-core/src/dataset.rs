//! The immutable in-memory sales table

use std::slice;

use crate::{FilterOptions, IntegrityError, Record};

/// An ordered, validated, read-only collection of records.
///
/// Built once per process; share it with `Arc<Dataset>` when several callers
/// need it at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate every record and take ownership of them.
    ///
    /// Fails on the first malformed record; nothing is coerced or dropped.
    pub fn new(records: Vec<Record>) -> Result<Self, IntegrityError> {
        for (idx, record) in records.iter().enumerate() {
            record.validate(idx + 1)?;
        }

        tracing::debug!("Dataset materialized with {} records", records.len());

        Ok(Self { records })
    }

    /// All records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values per dimension
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Filter engine: dataset + selection -> filtered view

use serde::Serialize;
use vg_core::{Dataset, FilterSelection, Record};

/// The records of a dataset admitted by a selection, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    /// Wrap already-filtered records. Order is kept as given.
    pub fn from_records(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Keep every record whose four dimension values are all allowed by `selection`
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let records: Vec<&Record> = if selection.admits_nothing() {
        Vec::new()
    } else {
        dataset.iter().filter(|r| selection.admits(r)).collect()
    };

    tracing::debug!("Filter kept {} of {} records", records.len(), dataset.len());

    FilteredView { records }
}

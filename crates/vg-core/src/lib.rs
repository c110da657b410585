//! Core data model for the game sales analytics engine
//!
//! This crate provides the record and dataset types, the filter selection
//! value object and the data-integrity errors shared by the other crates.

pub mod dataset;
pub mod dimension;
pub mod record;
pub mod selection;

use thiserror::Error;

// Re-export commonly used types
pub use dataset::Dataset;
pub use dimension::{Dimension, FilterOptions};
pub use record::{Record, SalesField};
pub use selection::FilterSelection;
pub use data::DatasetSource;

/// Data-integrity faults detected while materializing a dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityError {
    #[error("row {row}: missing value for required field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("row {row}: field '{field}' has non-numeric value '{value}'")]
    NotNumeric { row: usize, field: String, value: String },

    #[error("row {row}: sales field '{field}' must be finite and non-negative, got {value}")]
    InvalidSales { row: usize, field: &'static str, value: f64 },
}

impl IntegrityError {
    /// Row number (1-based, data rows only) the fault was found on
    pub fn row(&self) -> usize {
        match self {
            IntegrityError::MissingField { row, .. }
            | IntegrityError::NotNumeric { row, .. }
            | IntegrityError::InvalidSales { row, .. } => *row,
        }
    }
}

pub mod data {
    use crate::Dataset;

    /// Trait for anything that can materialize a [`Dataset`]
    #[async_trait::async_trait]
    pub trait DatasetSource: Send + Sync {
        /// Load and validate the full dataset
        async fn load(&self) -> anyhow::Result<Dataset>;

        /// Get the source name/path
        fn source_name(&self) -> &str;
    }
}

//! Dataset loading for the game sales analytics engine

pub mod batch;
pub mod config;
pub mod schema;
pub mod sources;

use arrow::error::ArrowError;
use tokio::task::JoinError;
use thiserror::Error;
use vg_core::IntegrityError;

// Re-exports
pub use batch::{dataset_from_batch, records_to_batch};
pub use config::{ColumnMapping, LoadConfig, NullConfig};
pub use schema::{Column, ColumnIndex};
pub use sources::CsvSource;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(ArrowError),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required column '{0}' not found")]
    MissingColumn(String),

    #[error("Column '{column}' has unsupported type {found}")]
    ColumnType { column: String, found: String },

    #[error("Data integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<ArrowError> for DataError {
    fn from(error: ArrowError) -> Self {
        DataError::Arrow(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Config(error.to_string())
    }
}

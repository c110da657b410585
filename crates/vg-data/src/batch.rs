//! Arrow interop: records to and from `RecordBatch`

use std::sync::Arc;
use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use vg_core::{Dataset, IntegrityError, Record, SalesField};

use crate::config::ColumnMapping;
use crate::schema::Column;
use crate::DataError;

/// Build a batch from borrowed records, e.g. a filtered view for the raw data table
pub fn records_to_batch(
    records: &[&Record],
    mapping: &ColumnMapping,
) -> Result<RecordBatch, DataError> {
    let schema = Schema::new(
        Column::ALL
            .iter()
            .map(|column| Field::new(mapping.header(*column), column_type(*column), false))
            .collect::<Vec<_>>(),
    );

    let text = |f: fn(&Record) -> &str| -> ArrayRef {
        Arc::new(records.iter().map(|r| Some(f(*r))).collect::<StringArray>())
    };
    let sales = |field: SalesField| -> ArrayRef {
        Arc::new(records.iter().map(|r| Some(r.sales(field))).collect::<Float64Array>())
    };

    let columns: Vec<ArrayRef> = vec![
        text(|r| &r.name),
        Arc::new(records.iter().map(|r| Some(r.year)).collect::<Int32Array>()),
        text(|r| &r.genre),
        text(|r| &r.platform),
        text(|r| &r.publisher),
        sales(SalesField::NorthAmerica),
        sales(SalesField::Europe),
        sales(SalesField::Japan),
        sales(SalesField::Other),
        sales(SalesField::Global),
    ];

    RecordBatch::try_new(Arc::new(schema), columns).map_err(|e| e.into())
}

/// Materialize a dataset from a batch whose columns follow `mapping`.
///
/// Years may be Int32 or Int64, sales Float64, Float32 or Int64. A null in any
/// required column is a data-integrity fault.
pub fn dataset_from_batch(
    batch: &RecordBatch,
    mapping: &ColumnMapping,
) -> Result<Dataset, DataError> {
    let names = string_column(batch, mapping, Column::Name)?;
    let years = int_column(batch, mapping, Column::Year)?;
    let genres = string_column(batch, mapping, Column::Genre)?;
    let platforms = string_column(batch, mapping, Column::Platform)?;
    let publishers = string_column(batch, mapping, Column::Publisher)?;
    let na = float_column(batch, mapping, Column::SalesNa)?;
    let eu = float_column(batch, mapping, Column::SalesEu)?;
    let jp = float_column(batch, mapping, Column::SalesJp)?;
    let other = float_column(batch, mapping, Column::SalesOther)?;
    let global = float_column(batch, mapping, Column::SalesGlobal)?;

    let mut records = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        let row = i + 1;
        let missing = |column: Column| IntegrityError::MissingField {
            row,
            field: mapping.header(column).to_string(),
        };
        let year = years[i].ok_or_else(|| missing(Column::Year))?;
        let year = i32::try_from(year).map_err(|_| IntegrityError::NotNumeric {
            row,
            field: mapping.header(Column::Year).to_string(),
            value: year.to_string(),
        })?;

        records.push(Record {
            name: names[i].ok_or_else(|| missing(Column::Name))?.to_string(),
            year,
            genre: genres[i].ok_or_else(|| missing(Column::Genre))?.to_string(),
            platform: platforms[i].ok_or_else(|| missing(Column::Platform))?.to_string(),
            publisher: publishers[i].ok_or_else(|| missing(Column::Publisher))?.to_string(),
            sales_na: na[i].ok_or_else(|| missing(Column::SalesNa))?,
            sales_eu: eu[i].ok_or_else(|| missing(Column::SalesEu))?,
            sales_jp: jp[i].ok_or_else(|| missing(Column::SalesJp))?,
            sales_other: other[i].ok_or_else(|| missing(Column::SalesOther))?,
            sales_global: global[i].ok_or_else(|| missing(Column::SalesGlobal))?,
        });
    }

    Ok(Dataset::new(records)?)
}

fn column_type(column: Column) -> DataType {
    match column {
        Column::Name | Column::Genre | Column::Platform | Column::Publisher => DataType::Utf8,
        Column::Year => DataType::Int32,
        _ => DataType::Float64,
    }
}

fn lookup<'b>(
    batch: &'b RecordBatch,
    mapping: &ColumnMapping,
    column: Column,
) -> Result<(&'b ArrayRef, String), DataError> {
    let header = mapping.header(column);
    let idx = batch
        .schema()
        .index_of(header)
        .map_err(|_| DataError::MissingColumn(header.to_string()))?;
    Ok((batch.column(idx), header.to_string()))
}

fn unsupported(header: String, array: &ArrayRef) -> DataError {
    DataError::ColumnType {
        column: header,
        found: format!("{:?}", array.data_type()),
    }
}

fn string_column<'b>(
    batch: &'b RecordBatch,
    mapping: &ColumnMapping,
    column: Column,
) -> Result<Vec<Option<&'b str>>, DataError> {
    let (array, header) = lookup(batch, mapping, column)?;
    match array.data_type() {
        DataType::Utf8 => {
            let array = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().collect())
        }
        DataType::LargeUtf8 => {
            let array = array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().collect())
        }
        _ => Err(unsupported(header, array)),
    }
}

fn int_column(
    batch: &RecordBatch,
    mapping: &ColumnMapping,
    column: Column,
) -> Result<Vec<Option<i64>>, DataError> {
    let (array, header) = lookup(batch, mapping, column)?;
    match array.data_type() {
        DataType::Int32 => {
            let array = array
                .as_any()
                .downcast_ref::<Int32Array>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().map(|v| v.map(i64::from)).collect())
        }
        DataType::Int64 => {
            let array = array
                .as_any()
                .downcast_ref::<Int64Array>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().collect())
        }
        _ => Err(unsupported(header, array)),
    }
}

fn float_column(
    batch: &RecordBatch,
    mapping: &ColumnMapping,
    column: Column,
) -> Result<Vec<Option<f64>>, DataError> {
    let (array, header) = lookup(batch, mapping, column)?;
    match array.data_type() {
        DataType::Float64 => {
            let array = array
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().collect())
        }
        DataType::Float32 => {
            let array = array
                .as_any()
                .downcast_ref::<Float32Array>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().map(|v| v.map(f64::from)).collect())
        }
        DataType::Int64 => {
            let array = array
                .as_any()
                .downcast_ref::<Int64Array>()
                .ok_or_else(|| unsupported(header, array))?;
            Ok(array.iter().map(|v| v.map(|x| x as f64)).collect())
        }
        _ => Err(unsupported(header, array)),
    }
}

//! Required columns and their resolution against a file header

use vg_core::SalesField;

use crate::config::ColumnMapping;
use crate::DataError;

/// A required column of the sales table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Year,
    Genre,
    Platform,
    Publisher,
    SalesNa,
    SalesEu,
    SalesJp,
    SalesOther,
    SalesGlobal,
}

impl Column {
    /// All required columns in record field order
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::Year,
        Column::Genre,
        Column::Platform,
        Column::Publisher,
        Column::SalesNa,
        Column::SalesEu,
        Column::SalesJp,
        Column::SalesOther,
        Column::SalesGlobal,
    ];

    /// Column holding a given sales field
    pub fn for_sales(field: SalesField) -> Self {
        match field {
            SalesField::NorthAmerica => Column::SalesNa,
            SalesField::Europe => Column::SalesEu,
            SalesField::Japan => Column::SalesJp,
            SalesField::Other => Column::SalesOther,
            SalesField::Global => Column::SalesGlobal,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Position of every required column within a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; 10],
}

impl ColumnIndex {
    /// Locate each mapped header. Extra columns are ignored; a missing one is an error.
    pub fn resolve<'h>(
        headers: impl IntoIterator<Item = &'h str>,
        mapping: &ColumnMapping,
    ) -> Result<Self, DataError> {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let mut positions = [0usize; 10];

        for column in Column::ALL {
            let wanted = mapping.header(column);
            positions[column.slot()] = headers
                .iter()
                .position(|h| *h == wanted)
                .ok_or_else(|| DataError::MissingColumn(wanted.to_string()))?;
        }

        Ok(Self { positions })
    }

    /// Index of a column in the header row
    pub fn position(&self, column: Column) -> usize {
        self.positions[column.slot()]
    }

    /// Raw cell of a column from one CSV row
    pub fn cell<'r>(&self, row: &'r csv::StringRecord, column: Column) -> Option<&'r str> {
        row.get(self.position(column))
    }
}

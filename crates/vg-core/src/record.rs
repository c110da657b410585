//! A single row of game sales data

use serde::{Deserialize, Serialize};

use crate::IntegrityError;

/// One game sales record. Sales figures are in millions of units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub year: i32,
    pub genre: String,
    pub platform: String,
    pub publisher: String,
    pub sales_na: f64,
    pub sales_eu: f64,
    pub sales_jp: f64,
    pub sales_other: f64,
    /// Stored global total. Never re-derived from the regional fields.
    pub sales_global: f64,
}

/// The numeric sales columns of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesField {
    NorthAmerica,
    Europe,
    Japan,
    Other,
    Global,
}

impl SalesField {
    /// All sales fields in column order
    pub const ALL: [SalesField; 5] = [
        SalesField::NorthAmerica,
        SalesField::Europe,
        SalesField::Japan,
        SalesField::Other,
        SalesField::Global,
    ];

    /// Field name used in error messages
    pub fn field_name(&self) -> &'static str {
        match self {
            SalesField::NorthAmerica => "sales_na",
            SalesField::Europe => "sales_eu",
            SalesField::Japan => "sales_jp",
            SalesField::Other => "sales_other",
            SalesField::Global => "sales_global",
        }
    }
}

impl Record {
    /// Read one of the sales columns
    pub fn sales(&self, field: SalesField) -> f64 {
        match field {
            SalesField::NorthAmerica => self.sales_na,
            SalesField::Europe => self.sales_eu,
            SalesField::Japan => self.sales_jp,
            SalesField::Other => self.sales_other,
            SalesField::Global => self.sales_global,
        }
    }

    /// Check the record for data-integrity faults.
    ///
    /// `row` is only used to locate the fault in the returned error.
    pub fn validate(&self, row: usize) -> Result<(), IntegrityError> {
        let text_fields = [
            ("name", &self.name),
            ("genre", &self.genre),
            ("platform", &self.platform),
            ("publisher", &self.publisher),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(IntegrityError::MissingField {
                    row,
                    field: field.to_string(),
                });
            }
        }

        for field in SalesField::ALL {
            let value = self.sales(field);
            if !value.is_finite() || value < 0.0 {
                return Err(IntegrityError::InvalidSales {
                    row,
                    field: field.field_name(),
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            name: "Wii Sports".to_string(),
            year: 2006,
            genre: "Sports".to_string(),
            platform: "Wii".to_string(),
            publisher: "Nintendo".to_string(),
            sales_na: 41.49,
            sales_eu: 29.02,
            sales_jp: 3.77,
            sales_other: 8.46,
            sales_global: 82.74,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(record().validate(1).is_ok());
    }

    #[test]
    fn test_blank_text_field_is_missing() {
        let mut r = record();
        r.publisher = "  ".to_string();

        let err = r.validate(7).unwrap_err();
        assert_eq!(err, IntegrityError::MissingField { row: 7, field: "publisher".to_string() });
        assert_eq!(err.row(), 7);
    }

    #[test]
    fn test_negative_or_nan_sales_rejected() {
        let mut r = record();
        r.sales_jp = -1.0;
        assert!(matches!(
            r.validate(2),
            Err(IntegrityError::InvalidSales { field: "sales_jp", .. })
        ));

        let mut r = record();
        r.sales_global = f64::NAN;
        assert!(matches!(
            r.validate(3),
            Err(IntegrityError::InvalidSales { field: "sales_global", .. })
        ));
    }

    #[test]
    fn test_sales_accessor() {
        let r = record();
        assert_eq!(r.sales(SalesField::Europe), 29.02);
        assert_eq!(r.sales(SalesField::Global), 82.74);
    }
}

//! Missing value detection for data loading

use serde::{Serialize, Deserialize};
use vg_core::IntegrityError;

/// Which raw cell values count as missing.
///
/// A missing value in a required column is a data-integrity fault; it is
/// reported, never replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    /// Patterns to treat as missing
    pub patterns: Vec<String>,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: ["", "-", "N/A", "NA", "null", "None", "NaN"]
                .into_iter()
                .map(String::from)
                .collect(),
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Check if a (trimmed) value should be treated as missing
    pub fn is_null(&self, value: &str) -> bool {
        let value = value.trim();
        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                value == pattern
            } else {
                value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Return the trimmed value, or a missing-field fault for `field` on `row`
    pub fn require<'a>(
        &self,
        value: Option<&'a str>,
        row: usize,
        field: &str,
    ) -> Result<&'a str, IntegrityError> {
        match value {
            Some(v) if !self.is_null(v) => Ok(v.trim()),
            _ => Err(IntegrityError::MissingField { row, field: field.to_string() }),
        }
    }
}

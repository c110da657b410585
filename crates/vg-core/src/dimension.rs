//! Categorical dimensions a dataset can be filtered on

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Record;

/// The four filterable dimensions of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Year,
    Genre,
    Platform,
    Publisher,
}

impl Dimension {
    /// All dimensions, in sidebar order
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Genre,
        Dimension::Platform,
        Dimension::Publisher,
    ];

    /// The dimensions holding text values
    pub const TEXT: [Dimension; 3] = [Dimension::Genre, Dimension::Platform, Dimension::Publisher];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Genre => "Genre",
            Dimension::Platform => "Platform",
            Dimension::Publisher => "Publisher",
        }
    }

    /// Text value of a record on this dimension.
    ///
    /// Returns `None` for [`Dimension::Year`], which is numeric.
    pub fn text_of<'a>(&self, record: &'a Record) -> Option<&'a str> {
        match self {
            Dimension::Year => None,
            Dimension::Genre => Some(&record.genre),
            Dimension::Platform => Some(&record.platform),
            Dimension::Publisher => Some(&record.publisher),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct values observed per dimension, used to populate a selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Most recent year first
    pub years: Vec<i32>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub publishers: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct values of every dimension
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut genres = BTreeSet::new();
        let mut platforms = BTreeSet::new();
        let mut publishers = BTreeSet::new();

        for record in records {
            years.insert(record.year);
            genres.insert(record.genre.as_str());
            platforms.insert(record.platform.as_str());
            publishers.insert(record.publisher.as_str());
        }

        let owned = |set: BTreeSet<&str>| set.into_iter().map(str::to_string).collect();

        Self {
            years: years.into_iter().rev().collect(),
            genres: owned(genres),
            platforms: owned(platforms),
            publishers: owned(publishers),
        }
    }

    /// Text values of one dimension; empty for [`Dimension::Year`]
    pub fn text_values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Year => &[],
            Dimension::Genre => &self.genres,
            Dimension::Platform => &self.platforms,
            Dimension::Publisher => &self.publishers,
        }
    }

    /// Number of distinct values on a dimension
    pub fn count(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Year => self.years.len(),
            other => self.text_values(other).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, genre: &str, platform: &str, publisher: &str) -> Record {
        Record {
            name: format!("{genre} {year}"),
            year,
            genre: genre.to_string(),
            platform: platform.to_string(),
            publisher: publisher.to_string(),
            sales_na: 0.0,
            sales_eu: 0.0,
            sales_jp: 0.0,
            sales_other: 0.0,
            sales_global: 1.0,
        }
    }

    #[test]
    fn test_options_are_distinct_and_ordered() {
        let records = vec![
            record(2006, "Sports", "Wii", "Nintendo"),
            record(1985, "Platform", "NES", "Nintendo"),
            record(2013, "Action", "PS3", "Take-Two Interactive"),
            record(2006, "Action", "Wii", "Nintendo"),
        ];

        let options = FilterOptions::from_records(&records);

        assert_eq!(options.years, vec![2013, 2006, 1985]);
        assert_eq!(options.genres, vec!["Action", "Platform", "Sports"]);
        assert_eq!(options.platforms, vec!["NES", "PS3", "Wii"]);
        assert_eq!(options.publishers, vec!["Nintendo", "Take-Two Interactive"]);
        assert_eq!(options.count(Dimension::Year), 3);
        assert_eq!(options.count(Dimension::Publisher), 2);
    }

    #[test]
    fn test_text_of_dimension() {
        let r = record(2006, "Sports", "Wii", "Nintendo");
        assert_eq!(Dimension::Genre.text_of(&r), Some("Sports"));
        assert_eq!(Dimension::Platform.text_of(&r), Some("Wii"));
        assert_eq!(Dimension::Year.text_of(&r), None);
    }
}
